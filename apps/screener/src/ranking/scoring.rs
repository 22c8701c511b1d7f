/// Maps distances to similarity scores relative to the batch they came from.
///
/// The closest distance scores 1.0, the farthest 0.0, everything else linearly in
/// between. When all distances are equal (a single resume, or identical vectors)
/// every score is 1.0.
///
/// Scores are only comparable within one batch: adding or removing a resume
/// moves the min/max and with them everyone else's score.
///
/// Distances arrive as f64 so the spread of a batch with very large vectors is
/// still finite; scores are narrowed to f32 at the end.
pub fn normalize_distances(distances: &[f64]) -> Vec<f32> {
    let Some(&first) = distances.first() else {
        return Vec::new();
    };

    let (min, max) = distances
        .iter()
        .fold((first, first), |(lo, hi), &d| (lo.min(d), hi.max(d)));

    let spread = max - min;
    if spread > 0.0 {
        distances
            .iter()
            .map(|&d| (1.0 - (d - min) / spread).clamp(0.0, 1.0) as f32)
            .collect()
    } else {
        vec![1.0; distances.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_is_one_farthest_is_zero() {
        let scores = normalize_distances(&[2.0, 4.0, 6.0]);
        assert_eq!(scores, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_single_distance_scores_one() {
        assert_eq!(normalize_distances(&[42.0]), vec![1.0]);
    }

    #[test]
    fn test_equal_distances_all_score_one() {
        assert_eq!(normalize_distances(&[3.5, 3.5, 3.5]), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_distances(&[]).is_empty());
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let scores = normalize_distances(&[0.1, 1e6, 17.0, 0.1000001, 3.3]);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_huge_spread_stays_in_unit_interval() {
        let scores = normalize_distances(&[1.0, 1e40, 1.2e77]);
        assert_eq!(scores[0], 1.0);
        assert_eq!(scores[2], 0.0);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_scores_depend_on_batch() {
        let alone = normalize_distances(&[1.0, 3.0]);
        let with_outlier = normalize_distances(&[1.0, 3.0, 5.0]);
        assert_eq!(alone[1], 0.0);
        assert_eq!(with_outlier[1], 0.5);
    }
}
