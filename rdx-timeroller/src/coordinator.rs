//! The coordinator that keeps the hour, minute and AM/PM rollers in step.

use crate::common::{AmPmLabels, GestureDriver, ListenerId, RollerKind, SelectedTime};
use crate::components::laps::LapCounter;
use crate::components::link::HourMinuteLink;
use crate::components::roller::{AmPmView, RollerKey, RollerRange, RollerView};
use crate::components::rules::{am_pm_after_hour_laps, hour_carry_from_minute_laps};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::events::PickerEvent;
use slotmap::SlotMap;
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

/// A closure invoked with every committed time.
pub type CommitListener = Box<dyn FnMut(SelectedTime) + Send>;

/// The main Timeroller coordinator.
///
/// This struct owns the baseline `SelectedTime`, the lap counters built from
/// it and the provisional link state. The embedding UI forwards each roller
/// primitive's callbacks to the matching method here and renders the rollers
/// from `hour_roller`, `minute_roller` and `am_pm_picker`.
///
/// All methods run synchronously inside the UI's event callback. There is no
/// internal locking: one gesture is processed at a time through `&mut self`.
pub struct ClockCoordinator {
    baseline: SelectedTime,
    labels: AmPmLabels,
    generation: u64,
    hour_laps: LapCounter,
    minute_laps: LapCounter,
    link: HourMinuteLink,
    commit_listeners: SlotMap<ListenerId, CommitListener>,
    event_sender: broadcast::Sender<PickerEvent>,
}

// Core implementation block for internal logic.
impl ClockCoordinator {
    /// Creates a new `ClockCoordinator` starting from `selected_time`.
    ///
    /// `on_commit` is registered as the first commit listener.
    pub fn new(
        selected_time: SelectedTime,
        labels: AmPmLabels,
        on_commit: impl FnMut(SelectedTime) + Send + 'static,
    ) -> Self {
        const CHANNEL_CAPACITY: usize = 64;
        let (event_sender, _) = broadcast::channel(CHANNEL_CAPACITY);

        let mut commit_listeners: SlotMap<ListenerId, CommitListener> = SlotMap::with_key();
        commit_listeners.insert(Box::new(on_commit));

        Self {
            baseline: selected_time,
            labels,
            generation: 0,
            hour_laps: RollerRange::HOURS.lap_counter(i64::from(selected_time.hour())),
            minute_laps: RollerRange::MINUTES.lap_counter(i64::from(selected_time.minute())),
            link: HourMinuteLink::new(&selected_time),
            commit_listeners,
            event_sender,
        }
    }

    /// Creates a coordinator from a loaded `PickerConfig`.
    pub fn from_config(
        config: &PickerConfig,
        on_commit: impl FnMut(SelectedTime) + Send + 'static,
    ) -> Result<Self, PickerError> {
        Ok(Self::new(
            config.initial_selected_time(),
            config.labels()?,
            on_commit,
        ))
    }

    /// Rebuilds the lap counters and discards the provisional state.
    #[doc(hidden)]
    fn reset_link(&mut self) {
        self.generation += 1;
        self.hour_laps = RollerRange::HOURS.lap_counter(i64::from(self.baseline.hour()));
        self.minute_laps = RollerRange::MINUTES.lap_counter(i64::from(self.baseline.minute()));
        self.link = HourMinuteLink::new(&self.baseline);
    }

    #[doc(hidden)]
    fn rebase(&mut self, baseline: SelectedTime) {
        self.baseline = baseline;
        self.reset_link();
        info!(
            "Baseline reset to {} (generation {}).",
            self.baseline, self.generation
        );
        self.event_sender
            .send(PickerEvent::BaselineReset {
                baseline,
                generation: self.generation,
            })
            .ok();
    }

    #[doc(hidden)]
    fn begin(&mut self, driver: GestureDriver) {
        if self.link.claim(driver) {
            debug!("Gesture driven by {:?}.", driver);
            self.event_sender
                .send(PickerEvent::GestureStarted { driver })
                .ok();
        }
    }

    #[doc(hidden)]
    fn publish_provisional(&mut self, changing_hour: i64, changing_is_am: bool) {
        if self.link.set_provisional(changing_hour, changing_is_am) {
            debug!(
                "Provisional state: hour {:+}, {}.",
                changing_hour,
                self.labels.label_for(changing_is_am)
            );
            self.event_sender
                .send(PickerEvent::ProvisionalChanged {
                    driver: self.link.driver(),
                    changing_hour,
                    changing_is_am,
                })
                .ok();
        }
    }

    #[doc(hidden)]
    fn commit(&mut self, source: RollerKind, time: SelectedTime) -> SelectedTime {
        info!("{:?} roller committed {}.", source, time.format_with(&self.labels));
        self.link.release();
        for listener in self.commit_listeners.values_mut() {
            listener(time);
        }
        self.event_sender
            .send(PickerEvent::Committed { source, time })
            .ok();
        self.rebase(time);
        time
    }

    #[doc(hidden)]
    fn reject(&self, source: RollerKind, error: PickerError) -> PickerError {
        warn!("Rejected {:?} roller commit: {}", source, error);
        error
    }
}

// Public API implementation block.
impl ClockCoordinator {
    /// Handles the hour roller's index difference during a drag.
    ///
    /// Every full lap past the 12 <-> 1 boundary flips the provisional AM/PM.
    /// While the minute roller drives the gesture, hour roller movement is the
    /// carry it caused and is ignored here.
    pub fn hour_index_difference_changing(&mut self, index_difference: i64) {
        trace!("Hour roller index difference {}.", index_difference);
        if self.link.driver() == GestureDriver::Minute {
            trace!("Minute roller owns AM/PM for this gesture; ignoring.");
            return;
        }
        self.begin(GestureDriver::Hour);
        let laps = self.hour_laps.laps_for(index_difference);
        let changing_is_am = am_pm_after_hour_laps(laps, self.baseline.is_am());
        self.publish_provisional(self.link.changing_hour(), changing_is_am);
    }

    /// Handles the minute roller's index difference during a drag.
    ///
    /// Each minute lap moves the provisional hour by one, and the implied hour
    /// movement is fed through the hour lap counter to derive AM/PM.
    pub fn minute_index_difference_changing(&mut self, index_difference: i64) {
        trace!("Minute roller index difference {}.", index_difference);
        self.begin(GestureDriver::Minute);
        let hour_index_difference = self.minute_laps.laps_for(index_difference);
        let changing_hour =
            hour_carry_from_minute_laps(hour_index_difference, i64::from(self.baseline.hour()));
        let laps = self.hour_laps.laps_for(hour_index_difference);
        let changing_is_am = am_pm_after_hour_laps(laps, self.baseline.is_am());
        self.publish_provisional(changing_hour, changing_is_am);
    }

    /// Commits the hour roller's final value together with the provisional AM/PM.
    pub fn commit_hour(&mut self, new_hour: i64) -> Result<SelectedTime, PickerError> {
        let time = self
            .baseline
            .with_hour(new_hour)
            .map_err(|e| self.reject(RollerKind::Hour, e))?
            .with_is_am(self.link.changing_is_am());
        Ok(self.commit(RollerKind::Hour, time))
    }

    /// Commits the minute roller's final value together with the carried hour
    /// and the provisional AM/PM.
    pub fn commit_minute(&mut self, new_minute: i64) -> Result<SelectedTime, PickerError> {
        let time = SelectedTime::new(
            self.link.displayed_hour(&self.baseline),
            new_minute,
            self.link.changing_is_am(),
        )
        .map_err(|e| self.reject(RollerKind::Minute, e))?;
        Ok(self.commit(RollerKind::Minute, time))
    }

    /// Commits a user selection on the AM/PM picker.
    pub fn commit_am_pm(&mut self, new_is_am: bool) -> Result<SelectedTime, PickerError> {
        let time = SelectedTime::new(
            self.link.displayed_hour(&self.baseline),
            i64::from(self.baseline.minute()),
            new_is_am,
        )
        .map_err(|e| self.reject(RollerKind::AmPm, e))?;
        Ok(self.commit(RollerKind::AmPm, time))
    }

    /// Discards the current gesture. No listener is notified.
    pub fn cancel_gesture(&mut self) {
        debug!("Gesture cancelled; provisional state discarded.");
        self.reset_link();
        self.event_sender.send(PickerEvent::GestureCancelled).ok();
    }

    /// Replaces the baseline, e.g. when the embedding application changes the
    /// selected time from outside. Does nothing if the time is unchanged.
    pub fn set_baseline(&mut self, selected_time: SelectedTime) {
        if selected_time != self.baseline {
            self.rebase(selected_time);
        }
    }

    /// Registers an additional commit listener.
    ///
    /// # Returns
    /// A `ListenerId` which can be used to later remove this listener.
    pub fn on_commit(
        &mut self,
        listener: impl FnMut(SelectedTime) + Send + 'static,
    ) -> ListenerId {
        self.commit_listeners.insert(Box::new(listener))
    }

    /// Removes a commit listener.
    ///
    /// Returns `true` if the listener was found and removed.
    pub fn remove_commit_listener(&mut self, id: ListenerId) -> bool {
        self.commit_listeners.remove(id).is_some()
    }

    /// Subscribes to the `PickerEvent` stream.
    pub fn subscribe_events(&self) -> broadcast::Receiver<PickerEvent> {
        self.event_sender.subscribe()
    }

    /// What the hour roller primitive should display.
    pub fn hour_roller(&self) -> RollerView {
        RollerView {
            value: self.link.displayed_hour(&self.baseline),
            range: RollerRange::HOURS,
            key: RollerKey {
                generation: self.generation,
                changing_hour: self.link.changing_hour(),
            },
        }
    }

    /// What the minute roller primitive should display.
    pub fn minute_roller(&self) -> RollerView {
        RollerView {
            value: i64::from(self.baseline.minute()),
            range: RollerRange::MINUTES,
            key: RollerKey {
                generation: self.generation,
                changing_hour: 0,
            },
        }
    }

    /// What the AM/PM picker primitive should display.
    pub fn am_pm_picker(&self) -> AmPmView {
        AmPmView {
            labels: self.labels.clone(),
            is_am: self.link.changing_is_am(),
        }
    }

    /// The hour and AM/PM currently shown, on top of the baseline minute.
    pub fn provisional_time(&self) -> SelectedTime {
        let hour = self.link.displayed_hour(&self.baseline);
        self.baseline
            .with_hour(hour)
            .unwrap_or(self.baseline)
            .with_is_am(self.link.changing_is_am())
    }

    pub fn baseline(&self) -> SelectedTime {
        self.baseline
    }

    pub fn labels(&self) -> &AmPmLabels {
        &self.labels
    }

    pub fn driver(&self) -> GestureDriver {
        self.link.driver()
    }

    pub fn changing_hour(&self) -> i64 {
        self.link.changing_hour()
    }

    pub fn changing_is_am(&self) -> bool {
        self.link.changing_is_am()
    }
}
