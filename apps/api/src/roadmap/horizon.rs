//! Timeline horizon: how many roadmap stages fit a planning window in months.

use crate::models::roadmap::TimelineStage;

pub const DEFAULT_TIMELINE_MONTHS: u32 = 12;

/// Trims a timeline to what fits the planning horizon.
///
/// Under 9 months shows at most 2 stages, under 18 at most 3, under 24 at most 4;
/// longer horizons show everything.
pub fn limit_timeline(timeline: &[TimelineStage], months: u32) -> Vec<TimelineStage> {
    let cap = match months {
        m if m < 9 => Some(2),
        m if m < 18 => Some(3),
        m if m < 24 => Some(4),
        _ => None,
    };
    let keep = cap.map_or(timeline.len(), |c| c.min(timeline.len()));
    timeline[..keep].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(n: usize) -> Vec<TimelineStage> {
        (0..n)
            .map(|i| TimelineStage {
                period_label: format!("Period {i}"),
                title: format!("Stage {i}"),
                description: String::new(),
                required_skills: vec![],
                known_skills: vec![],
            })
            .collect()
    }

    #[test]
    fn test_short_horizon_keeps_two() {
        assert_eq!(limit_timeline(&timeline(3), 6).len(), 2);
    }

    #[test]
    fn test_default_horizon_keeps_three() {
        assert_eq!(limit_timeline(&timeline(5), DEFAULT_TIMELINE_MONTHS).len(), 3);
    }

    #[test]
    fn test_eighteen_months_keeps_four() {
        assert_eq!(limit_timeline(&timeline(6), 18).len(), 4);
    }

    #[test]
    fn test_long_horizon_keeps_everything() {
        assert_eq!(limit_timeline(&timeline(6), 36).len(), 6);
    }

    #[test]
    fn test_short_timeline_untouched() {
        let t = timeline(2);
        assert_eq!(limit_timeline(&t, 3), t);
    }

    #[test]
    fn test_prefix_order_preserved() {
        let limited = limit_timeline(&timeline(4), 6);
        assert_eq!(limited[0].title, "Stage 0");
        assert_eq!(limited[1].title, "Stage 1");
    }
}
