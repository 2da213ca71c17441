//! Sensor registration and delivery.
//!
//! A registered [`PressureSource`] is polled on a worker thread every
//! [`SENSOR_INTERVAL`](crate::timing::SENSOR_INTERVAL) and each reading is
//! sent to the UI thread as a single `f32` over a channel. The UI thread
//! drains the channel once per frame.
//!
//! The feed is registered only while the altimeter is in live mode.
//! Unregistering closes the control channel, which wakes the worker out of
//! its wait immediately; the worker then hands the source back through its
//! join handle so the next registration continues where it left off.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use altimeter_common::PressureMode;
use altimeter_common::sensor::PressureSource;

/// Registration change made by [`SensorFeed::sync`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedChange {
    Registered,
    Unregistered,
    /// The worker panicked; the source is gone and cannot be registered again.
    SourceLost,
}

struct Registration<S> {
    readings: Receiver<f32>,
    /// Dropped to stop the worker.
    stop: Sender<()>,
    worker: JoinHandle<S>,
}

/// Owns a pressure source and delivers its readings while registered.
pub struct SensorFeed<S> {
    interval: Duration,
    idle: Option<S>,
    active: Option<Registration<S>>,
}

impl<S> SensorFeed<S>
where
    S: PressureSource + Send + 'static,
{
    pub fn new(
        source: S,
        interval: Duration,
    ) -> Self {
        Self {
            interval,
            idle: Some(source),
            active: None,
        }
    }

    #[inline]
    pub const fn is_registered(&self) -> bool { self.active.is_some() }

    /// Start delivering readings. Returns `Ok(false)` if already registered
    /// or the source was lost.
    pub fn register(&mut self) -> io::Result<bool> {
        if self.active.is_some() {
            return Ok(false);
        }
        let Some(source) = self.idle.take() else {
            return Ok(false);
        };

        let (reading_tx, reading_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel();
        let interval = self.interval;

        // The source moves into the closure; on spawn failure it is dropped
        // along with it.
        let worker = thread::Builder::new()
            .name("pressure-sensor".into())
            .spawn(move || poll_source(source, &reading_tx, &stop_rx, interval))?;

        self.active = Some(Registration {
            readings: reading_rx,
            stop: stop_tx,
            worker,
        });
        Ok(true)
    }

    /// Stop delivering readings and take the source back.
    ///
    /// Returns `Some(FeedChange::Unregistered)` on success,
    /// `Some(FeedChange::SourceLost)` if the worker had panicked, and `None`
    /// if nothing was registered.
    pub fn unregister(&mut self) -> Option<FeedChange> {
        let Registration { readings, stop, worker } = self.active.take()?;
        drop(stop);
        drop(readings);

        match worker.join() {
            Ok(source) => {
                self.idle = Some(source);
                Some(FeedChange::Unregistered)
            }
            Err(_) => Some(FeedChange::SourceLost),
        }
    }

    /// Register or unregister to match `mode`.
    pub fn sync(
        &mut self,
        mode: PressureMode,
    ) -> io::Result<Option<FeedChange>> {
        if mode.wants_sensor() {
            if self.register()? {
                return Ok(Some(FeedChange::Registered));
            }
            Ok(None)
        } else {
            Ok(self.unregister())
        }
    }

    /// Newest pending reading, discarding older ones. `None` if no reading
    /// arrived since the last call or the feed is not registered.
    pub fn drain(&self) -> Option<f32> { self.active.as_ref()?.readings.try_iter().last() }
}

impl<S> Drop for SensorFeed<S> {
    fn drop(&mut self) {
        if let Some(Registration { readings, stop, worker }) = self.active.take() {
            drop(stop);
            drop(readings);
            worker.join().ok();
        }
    }
}

/// Worker loop: read, send, wait. Exits when either channel closes.
fn poll_source<S: PressureSource>(
    mut source: S,
    readings: &Sender<f32>,
    stop: &Receiver<()>,
    interval: Duration,
) -> S {
    loop {
        if let Some(pressure) = source.read()
            && readings.send(pressure).is_err()
        {
            break;
        }
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    source
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use altimeter_common::sensor::SyntheticBarometer;

    use super::*;

    const TEST_INTERVAL: Duration = Duration::from_millis(5);

    /// Counts up by one hPa per read.
    struct Ramp(f32);

    impl PressureSource for Ramp {
        fn read(&mut self) -> Option<f32> {
            self.0 += 1.0;
            Some(self.0)
        }
    }

    fn wait_for_reading<S: PressureSource + Send + 'static>(feed: &SensorFeed<S>) -> Option<f32> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if let Some(p) = feed.drain() {
                return Some(p);
            }
            thread::sleep(TEST_INTERVAL);
        }
        None
    }

    #[test]
    fn test_not_registered_delivers_nothing() {
        let feed = SensorFeed::new(Ramp(0.0), TEST_INTERVAL);
        assert!(!feed.is_registered());
        assert_eq!(feed.drain(), None);
    }

    #[test]
    fn test_registered_feed_delivers_readings() {
        let mut feed = SensorFeed::new(Ramp(900.0), TEST_INTERVAL);
        assert!(feed.register().unwrap());
        let p = wait_for_reading(&feed).expect("no reading delivered");
        assert!(p > 900.0);
    }

    #[test]
    fn test_double_register_is_noop() {
        let mut feed = SensorFeed::new(Ramp(0.0), TEST_INTERVAL);
        assert!(feed.register().unwrap());
        assert!(!feed.register().unwrap());
    }

    #[test]
    fn test_unregister_returns_source() {
        let mut feed = SensorFeed::new(Ramp(0.0), TEST_INTERVAL);
        feed.register().unwrap();
        let first = wait_for_reading(&feed).unwrap();

        assert_eq!(feed.unregister(), Some(FeedChange::Unregistered));
        assert!(!feed.is_registered());
        assert_eq!(feed.drain(), None);
        assert_eq!(feed.unregister(), None);

        // The ramp continues from where it stopped instead of restarting.
        feed.register().unwrap();
        let resumed = wait_for_reading(&feed).unwrap();
        assert!(resumed > first);
    }

    #[test]
    fn test_sync_follows_mode() {
        let mut feed = SensorFeed::new(Ramp(0.0), TEST_INTERVAL);
        assert_eq!(feed.sync(PressureMode::Live).unwrap(), Some(FeedChange::Registered));
        assert_eq!(feed.sync(PressureMode::Live).unwrap(), None);
        assert_eq!(feed.sync(PressureMode::Simulated).unwrap(), Some(FeedChange::Unregistered));
        assert_eq!(feed.sync(PressureMode::Simulated).unwrap(), None);
    }

    #[test]
    fn test_unavailable_sensor_delivers_nothing() {
        let mut feed = SensorFeed::new(SyntheticBarometer::unavailable(), TEST_INTERVAL);
        feed.register().unwrap();
        thread::sleep(TEST_INTERVAL * 10);
        assert_eq!(feed.drain(), None);
    }

    #[test]
    fn test_unregister_is_prompt() {
        let mut feed = SensorFeed::new(Ramp(0.0), Duration::from_secs(30));
        feed.register().unwrap();
        let start = Instant::now();
        feed.unregister();
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
