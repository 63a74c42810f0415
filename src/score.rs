/// Survival score: one point per `ms_per_point` of elapsed run time.
///
/// A clock that reads earlier than the session start scores zero rather than
/// wrapping.
pub fn compute_score(session_start_ms: u64, now_ms: u64, ms_per_point: u64) -> u64 {
    now_ms.saturating_sub(session_start_ms) / ms_per_point.max(1)
}

pub fn score_label(score: u64) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_floors_elapsed_time() {
        assert_eq!(compute_score(0, 3450, 100), 34);
        assert_eq!(compute_score(0, 99, 100), 0);
        assert_eq!(compute_score(0, 100, 100), 1);
    }

    #[test]
    fn test_score_is_relative_to_start() {
        assert_eq!(compute_score(12_000, 15_450, 100), 34);
    }

    #[test]
    fn test_clock_before_start_scores_zero() {
        assert_eq!(compute_score(5000, 4000, 100), 0);
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(34), "Score: 34");
    }
}
