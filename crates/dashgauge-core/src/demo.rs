//! Demo Mode - Simulated vehicle data generator for testing
//!
//! Generates plausible dashboard channel values for exercising gauges
//! without real sensors. Simulates an engine idling at ~850 RPM with
//! random throttle blips; the other channels are derived from RPM and
//! elapsed time.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

const IDLE_RPM: f64 = 850.0;
const RAMP_UP_MS: u64 = 300;
const HOLD_MS: u64 = 200;
const RAMP_DOWN_MS: u64 = 800;

/// One sample of every simulated channel, in the canonical units the
/// layout engine expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoFrame {
    /// Road speed in the display unit (derived from RPM).
    pub speed: f64,
    pub rpm: f64,
    /// Battery voltage.
    pub voltage: f64,
    /// Fuel level percentage (0–100).
    pub fuel_percent: f64,
    /// Coolant temperature in Celsius.
    pub coolant_temp: f64,
    /// Oil pressure in PSI.
    pub oil_pressure: f64,
}

/// Demo simulator that generates correlated dashboard sensor data
pub struct DemoSimulator {
    /// Time when simulation started (ms)
    start_time_ms: u64,
    /// Last update time (ms)
    last_update_ms: u64,
    /// Time of next throttle blip (ms from start)
    next_blip_at_ms: u64,
    /// Current blip state
    blip_state: BlipState,
    /// Current RPM (smoothed)
    current_rpm: f64,
    /// Target RPM for current blip
    blip_target_rpm: f64,
    /// Remaining fuel percentage
    fuel_percent: f64,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BlipState {
    /// Engine idling normally
    Idle,
    /// Throttle opening, RPM rising
    RampUp { start_ms: u64 },
    /// At peak RPM, holding
    Hold { start_ms: u64 },
    /// Throttle closing, RPM falling
    RampDown { start_ms: u64 },
}

impl Default for DemoSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoSimulator {
    /// Create a new demo simulator
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let first_blip = rng.gen_range(8000..15000); // 8-15 seconds

        Self {
            start_time_ms: 0,
            last_update_ms: 0,
            next_blip_at_ms: first_blip,
            blip_state: BlipState::Idle,
            current_rpm: IDLE_RPM,
            blip_target_rpm: 0.0,
            fuel_percent: 100.0,
            rng,
        }
    }

    /// Update the simulation and sample every channel.
    ///
    /// `elapsed_ms` is milliseconds since the host started feeding the
    /// simulator; deltas between calls drive smoothing and fuel burn.
    pub fn update(&mut self, elapsed_ms: u64) -> DemoFrame {
        if self.start_time_ms == 0 {
            self.start_time_ms = elapsed_ms;
        }

        let sim_time = elapsed_ms - self.start_time_ms;
        let delta_ms = if self.last_update_ms > 0 {
            elapsed_ms.saturating_sub(self.last_update_ms)
        } else {
            0
        };
        self.last_update_ms = elapsed_ms;

        self.update_blip_state(sim_time);

        let target_rpm = self.calculate_target_rpm(sim_time);

        // Smooth RPM changes
        let rpm_rate = if target_rpm > self.current_rpm { 8000.0 } else { 3000.0 }; // RPM/sec
        let max_change = rpm_rate * (delta_ms as f64 / 1000.0);
        let rpm_diff = target_rpm - self.current_rpm;
        self.current_rpm += rpm_diff.clamp(-max_change, max_change);

        // Add idle wobble
        let t = sim_time as f64 / 1000.0;
        let idle_wobble = if matches!(self.blip_state, BlipState::Idle) {
            20.0 * (t * 2.5).sin() + 10.0 * (t * 7.3).sin()
        } else {
            0.0
        };
        let rpm = (self.current_rpm + idle_wobble).max(0.0);

        // Road speed follows revs through a fixed overall ratio,
        // ignoring clutch slip below idle.
        let speed = ((rpm - IDLE_RPM) * 0.02).max(0.0);

        // Alternator holds ~14.2 V with a little ripple once running.
        let voltage = 14.2 + 0.2 * (t * 0.5).sin();

        // Coolant warms toward operating temperature over ~2 minutes.
        let coolant_temp = 20.0 + 70.0 * (1.0 - (-t / 120.0).exp());

        // Oil pressure tracks RPM.
        let oil_pressure = (18.0 + rpm * 0.007 + 1.5 * (t * 0.9).sin()).clamp(0.0, 100.0);

        // Fuel burn scales with RPM.
        let burn = rpm / 1000.0 * 0.0004 * (delta_ms as f64 / 1000.0) * 100.0;
        self.fuel_percent = (self.fuel_percent - burn).max(0.0);

        DemoFrame {
            speed,
            rpm,
            voltage,
            fuel_percent: self.fuel_percent,
            coolant_temp,
            oil_pressure,
        }
    }

    /// Update the blip state machine
    fn update_blip_state(&mut self, sim_time: u64) {
        match self.blip_state {
            BlipState::Idle => {
                if sim_time >= self.next_blip_at_ms {
                    // Start a new blip
                    self.blip_target_rpm = self.rng.gen_range(2000.0..4000.0);
                    self.blip_state = BlipState::RampUp { start_ms: sim_time };
                }
            }
            BlipState::RampUp { start_ms } => {
                if sim_time >= start_ms + RAMP_UP_MS {
                    self.blip_state = BlipState::Hold { start_ms: sim_time };
                }
            }
            BlipState::Hold { start_ms } => {
                if sim_time >= start_ms + HOLD_MS {
                    self.blip_state = BlipState::RampDown { start_ms: sim_time };
                }
            }
            BlipState::RampDown { start_ms } => {
                if sim_time >= start_ms + RAMP_DOWN_MS {
                    // Back to idle, schedule next blip
                    self.blip_state = BlipState::Idle;
                    let next_interval = self.rng.gen_range(8000..15000);
                    self.next_blip_at_ms = sim_time + next_interval;
                }
            }
        }
    }

    /// Calculate target RPM based on current blip state
    fn calculate_target_rpm(&self, sim_time: u64) -> f64 {
        match self.blip_state {
            BlipState::Idle => IDLE_RPM,
            BlipState::RampUp { start_ms } => {
                let progress = ((sim_time - start_ms) as f64 / RAMP_UP_MS as f64).min(1.0);
                IDLE_RPM + (self.blip_target_rpm - IDLE_RPM) * progress
            }
            BlipState::Hold { .. } => self.blip_target_rpm,
            BlipState::RampDown { start_ms } => {
                let progress = ((sim_time - start_ms) as f64 / RAMP_DOWN_MS as f64).min(1.0);
                self.blip_target_rpm + (IDLE_RPM - self.blip_target_rpm) * progress
            }
        }
    }
}
