use {
    crate::{
        catalog::ButtonImage,
        control::ControlFlags,
        matcher::{ButtonClicker, Outcome},
        report,
    },
    std::{thread::sleep, time::Duration},
};

/// One click performed during a sweep. `total` is the running counter value
/// after this click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub total: u64,
}

/// Fixed-rate polling loop over the button catalog. Strictly serial: a slow
/// sweep delays the next tick instead of overlapping with it.
pub struct Scanner<'a, C> {
    catalog: &'a [ButtonImage],
    clicker: C,
    clicks: u64,
}

impl<'a, C: ButtonClicker> Scanner<'a, C> {
    pub fn new(catalog: &'a [ButtonImage], clicker: C) -> Self {
        Self {
            catalog,
            clicker,
            clicks: 0,
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// One pass over the catalog, in catalog order. Every image gets exactly
    /// one attempt, even when an earlier image already matched.
    fn sweep(&mut self) -> Vec<Click> {
        let mut performed = Vec::new();
        for button in self.catalog {
            if let Outcome::Clicked { x, y } = self.clicker.find_and_click(button) {
                self.clicks += 1;
                performed.push(Click {
                    name: button.name.clone(),
                    x,
                    y,
                    total: self.clicks,
                });
            }
        }
        performed
    }

    /// One timer tick. Sweeps only when activation is on and returns the
    /// clicks performed; the interval sleep is the caller's job either way.
    pub fn tick(&mut self, active: bool) -> Vec<Click> {
        if active {
            self.sweep()
        } else {
            Vec::new()
        }
    }

    /// Runs until `flags` stop running, checking them once per tick.
    pub fn run(&mut self, flags: &ControlFlags, interval: Duration) {
        while flags.is_running() {
            for click in self.tick(flags.is_active()) {
                report::clicked(&click.name, click.x, click.y, click.total);
            }
            sleep(interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{
            collections::HashMap,
            path::PathBuf,
            sync::{Arc, Mutex},
        },
    };

    fn button(name: &str) -> ButtonImage {
        ButtonImage {
            path: PathBuf::from(format!("{name}.png")),
            name: name.into(),
        }
    }

    /// Scripted clicker: records attempts in order and reports a hit for the
    /// configured names only.
    #[derive(Default)]
    struct MockClicker {
        hits: HashMap<String, (i32, i32)>,
        attempts: Arc<Mutex<Vec<String>>>,
    }

    impl ButtonClicker for MockClicker {
        fn find_and_click(&mut self, button: &ButtonImage) -> Outcome {
            self.attempts.lock().unwrap().push(button.name.clone());
            match self.hits.get(&button.name) {
                Some(&(x, y)) => Outcome::Clicked { x, y },
                None => Outcome::NoMatch,
            }
        }
    }

    #[test]
    fn inactive_ticks_never_invoke_the_clicker() {
        let catalog = [button("Accept"), button("Continue")];
        let clicker = MockClicker::default();
        let attempts = clicker.attempts.clone();
        let mut scanner = Scanner::new(&catalog, clicker);

        for _ in 0..5 {
            scanner.tick(false);
        }
        assert!(attempts.lock().unwrap().is_empty());
        assert_eq!(scanner.clicks(), 0);
    }

    #[test]
    fn active_tick_attempts_every_image_in_catalog_order() {
        let catalog = [button("Accept"), button("Confirm"), button("Continue")];
        let clicker = MockClicker::default();
        let attempts = clicker.attempts.clone();
        let mut scanner = Scanner::new(&catalog, clicker);

        scanner.tick(true);
        scanner.tick(true);
        assert_eq!(
            *attempts.lock().unwrap(),
            ["Accept", "Confirm", "Continue", "Accept", "Confirm", "Continue"]
        );
    }

    #[test]
    fn hit_for_one_image_clicks_once_and_reports_its_name() {
        // The mock stands in for a match at rect (100, 100, 50, 20), whose
        // center is (125, 110).
        let catalog = [button("Accept"), button("Continue")];
        let mut clicker = MockClicker::default();
        clicker.hits.insert("Continue".into(), (125, 110));
        let attempts = clicker.attempts.clone();
        let mut scanner = Scanner::new(&catalog, clicker);

        let performed = scanner.tick(true);
        assert_eq!(scanner.clicks(), 1);
        assert_eq!(*attempts.lock().unwrap(), ["Accept", "Continue"]);
        assert_eq!(
            performed,
            [Click {
                name: "Continue".into(),
                x: 125,
                y: 110,
                total: 1,
            }]
        );
    }

    #[test]
    fn counter_accumulates_deterministically_across_ticks() {
        let catalog = [button("Accept"), button("Confirm"), button("Continue")];
        for _ in 0..2 {
            let mut clicker = MockClicker::default();
            clicker.hits.insert("Accept".into(), (10, 10));
            clicker.hits.insert("Continue".into(), (20, 20));
            let mut scanner = Scanner::new(&catalog, clicker);
            for _ in 0..4 {
                scanner.tick(true);
            }
            // 2 hits per tick, 4 ticks.
            assert_eq!(scanner.clicks(), 8);
        }
    }

    #[test]
    fn run_exits_when_running_is_cleared() {
        let catalog = [button("Accept")];
        let mut scanner = Scanner::new(&catalog, MockClicker::default());
        let flags = ControlFlags::new();
        flags.request_exit();
        scanner.run(&flags, Duration::ZERO);
        assert_eq!(scanner.clicks(), 0);
    }

    /// Clears the running flag from within a sweep, like an exit hotkey
    /// firing mid-scan; the loop must finish that tick and stop.
    struct ExitingClicker {
        flags: Arc<ControlFlags>,
        attempts: Arc<Mutex<Vec<String>>>,
    }

    impl ButtonClicker for ExitingClicker {
        fn find_and_click(&mut self, button: &ButtonImage) -> Outcome {
            self.attempts.lock().unwrap().push(button.name.clone());
            self.flags.request_exit();
            Outcome::NoMatch
        }
    }

    #[test]
    fn run_observes_exit_at_tick_granularity() {
        let catalog = [button("Accept"), button("Continue")];
        let flags = Arc::new(ControlFlags::new());
        let attempts = Arc::new(Mutex::new(Vec::new()));
        let clicker = ExitingClicker {
            flags: flags.clone(),
            attempts: attempts.clone(),
        };
        let mut scanner = Scanner::new(&catalog, clicker);
        flags.toggle_active();

        scanner.run(&flags, Duration::ZERO);
        // The sweep in flight completes before the exit is observed.
        assert_eq!(*attempts.lock().unwrap(), ["Accept", "Continue"]);
    }
}
