use rand::Rng;

use crate::domain::{NpkReading, SensorReading};
use crate::time::Clock;

/// Where the dashboard gets its current reading from
pub trait SensorSource: Send + Sync {
    fn current_reading(&self, clock: &dyn Clock) -> SensorReading;
}

/// Fixed reading shown until real hardware is connected
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSensorSource;

impl DemoSensorSource {
    pub fn reading() -> SensorReading {
        SensorReading {
            moisture: Some(63.0),
            ph: Some(6.8),
            npk: Some(NpkReading::new(45.0, 32.0, 78.0)),
            temperature: Some(28.5),
            last_update: None,
        }
    }
}

impl SensorSource for DemoSensorSource {
    fn current_reading(&self, clock: &dyn Clock) -> SensorReading {
        SensorReading {
            last_update: Some(clock.now_rfc3339()),
            ..Self::reading()
        }
    }
}

/// Random reading inside plausible field ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSensorSource;

impl SensorSource for SimulatedSensorSource {
    fn current_reading(&self, clock: &dyn Clock) -> SensorReading {
        let mut rng = rand::thread_rng();
        // pH in 0.1 steps
        let ph_tenths: u32 = rng.gen_range(55..=75);

        SensorReading {
            moisture: Some(f64::from(rng.gen_range(30u32..=80))),
            ph: Some(f64::from(ph_tenths) / 10.0),
            npk: Some(NpkReading::new(
                f64::from(rng.gen_range(20u32..=60)),
                f64::from(rng.gen_range(15u32..=45)),
                f64::from(rng.gen_range(40u32..=90)),
            )),
            temperature: Some(f64::from(rng.gen_range(25u32..=35))),
            last_update: Some(clock.now_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    #[test]
    fn test_demo_reading() {
        let clock = FixedClock::from_rfc3339("2024-05-01T08:00:00Z").unwrap();
        let reading = DemoSensorSource.current_reading(&clock);

        assert_eq!(reading.moisture, Some(63.0));
        assert_eq!(reading.ph, Some(6.8));
        assert_eq!(reading.npk, Some(NpkReading::new(45.0, 32.0, 78.0)));
        assert_eq!(reading.temperature, Some(28.5));
        assert_eq!(reading.last_update, Some(clock.now_rfc3339()));
    }

    #[test]
    fn test_simulated_reading_stays_in_range() {
        let clock = FixedClock::from_rfc3339("2024-05-01T08:00:00Z").unwrap();
        let source = SimulatedSensorSource;

        for _ in 0..200 {
            let r = source.current_reading(&clock);
            let moisture = r.moisture.unwrap();
            assert!((30.0..=80.0).contains(&moisture));
            let ph = r.ph.unwrap();
            assert!((5.5..=7.5).contains(&ph));
            let npk = r.npk.unwrap();
            assert!((20.0..=60.0).contains(&npk.nitrogen.unwrap()));
            assert!((15.0..=45.0).contains(&npk.phosphorus.unwrap()));
            assert!((40.0..=90.0).contains(&npk.potassium.unwrap()));
            assert!((25.0..=35.0).contains(&r.temperature.unwrap()));
        }
    }
}
