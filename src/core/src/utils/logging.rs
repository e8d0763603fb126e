use log::debug;
use std::time::Instant;

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let now = Instant::now();

        let result = action();

        debug!("{}, {} ms", message, now.elapsed().as_millis());

        result
    }
}

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_returns_action_result() {
        let (value, _) = TimeEstimation::estimate(|| 2 + 2);
        assert_eq!(value, 4);

        let value = Logging::estimate_result(|| "done", "test action");
        assert_eq!(value, "done");
    }
}
