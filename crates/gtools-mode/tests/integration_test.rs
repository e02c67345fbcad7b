use gtools_mode::{BuildMode, Mode, ModeError, ModeOperator, DEVELOPMENT, PRODUCTION};
use std::cell::RefCell;

/// Consumer that only sees the trait.
struct Uploader<'a, M: ModeOperator> {
    mode: &'a M,
    sent: RefCell<Vec<String>>,
}

impl<'a, M: ModeOperator> Uploader<'a, M> {
    fn new(mode: &'a M) -> Self {
        Self {
            mode,
            sent: RefCell::new(Vec::new()),
        }
    }

    fn report(&self, event: &str) {
        self.mode
            .execute_if_mode_is_production(|| self.sent.borrow_mut().push(event.to_string()));
    }
}

#[test]
fn test_development_build_skips_production_work() {
    let mode = BuildMode::resolve("").expect("default mode");
    let uploader = Uploader::new(&mode);

    uploader.report("startup");
    uploader.report("shutdown");

    assert_eq!(mode.get_mode(), DEVELOPMENT);
    assert!(uploader.sent.borrow().is_empty());
}

#[test]
fn test_production_build_runs_production_work() {
    let mode = BuildMode::resolve(PRODUCTION).expect("production mode");
    let uploader = Uploader::new(&mode);

    uploader.report("startup");

    assert_eq!(mode.get_mode(), PRODUCTION);
    assert_eq!(*uploader.sent.borrow(), vec!["startup".to_string()]);
}

#[test]
fn test_staging_is_rejected() {
    assert_eq!(
        BuildMode::resolve("staging"),
        Err(ModeError::Unrecognized {
            value: "staging".to_string()
        })
    );
    let outcome = std::panic::catch_unwind(|| BuildMode::init("staging"));
    assert!(outcome.is_err());
}

#[test]
fn test_compiled_mode_is_a_known_mode() {
    let mode = BuildMode::from_build();
    assert!(Mode::ALL.contains(&mode.mode()));
    assert_ne!(mode.is_development_mode(), mode.is_production_mode());
}
