//! Tests for claim resolution of closed paths

#[cfg(test)]
mod tests {
    use qixfield::algorithm::path::Path;
    use qixfield::algorithm::resolver::{
        Resolution, SeedSide, Seeds, candidate_mask, cut_mask, flood_region, resolve, seed_cells,
    };
    use qixfield::spatial::Field;

    fn bordered_field() -> Field {
        let Ok(field) = Field::new(10, 10, 2) else {
            unreachable!("10x10 field with border 2 should be valid");
        };
        field
    }

    fn l_path() -> Path {
        Path::from_vertices(vec![[3, 2], [3, 5], [7, 5]])
    }

    // Tests seeds straddle a vertical first segment horizontally
    // Verified by swapping the axis test
    #[test]
    fn test_seeds_vertical_segment() {
        assert_eq!(
            seed_cells(&l_path(), 10, 10),
            Some(Seeds {
                first: [2, 2],
                second: [4, 2],
            })
        );
    }

    // Tests seeds straddle a horizontal first segment vertically
    // Verified by offsetting from the segment end
    #[test]
    fn test_seeds_horizontal_segment() {
        let path = Path::from_vertices(vec![[2, 4], [7, 4]]);
        assert_eq!(
            seed_cells(&path, 10, 10),
            Some(Seeds {
                first: [2, 3],
                second: [2, 5],
            })
        );
    }

    // Tests seeds are clamped into the field and short paths give none
    // Verified by removing the clamp
    #[test]
    fn test_seeds_clamped() {
        let left_edge = Path::from_vertices(vec![[0, 0], [0, 5]]);
        assert_eq!(
            seed_cells(&left_edge, 10, 10),
            Some(Seeds {
                first: [0, 0],
                second: [1, 0],
            })
        );

        let bottom_edge = Path::from_vertices(vec![[5, 9], [8, 9]]);
        assert_eq!(
            seed_cells(&bottom_edge, 10, 10).map(|s| s.second),
            Some([5, 9])
        );

        assert_eq!(seed_cells(&Path::from_vertices(vec![[3, 3]]), 10, 10), None);
    }

    // Tests the cut covers every cell on the path and splits the candidates
    // Verified by rasterizing only the vertices
    #[test]
    fn test_cut_and_candidates() {
        let field = bordered_field();
        let cut = cut_mask(&l_path(), 10, 10);
        assert_eq!(cut.count(), 8);
        assert!(cut.get([3, 3]));
        assert!(cut.get([5, 5]));

        let candidate = candidate_mask(&field, &cut);
        assert_eq!(candidate.count(), 28);
        assert!(!candidate.get([3, 4]));
        assert!(!candidate.get([0, 0]));
    }

    // Tests flooding stays inside one side of the cut
    // Verified by flooding through diagonal neighbours
    #[test]
    fn test_flood_regions() {
        let field = bordered_field();
        let cut = cut_mask(&l_path(), 10, 10);
        let candidate = candidate_mask(&field, &cut);

        let Some(outer) = flood_region(&candidate, [2, 2]) else {
            unreachable!("first seed lies on a candidate cell");
        };
        assert_eq!(outer.area(), 16);
        assert!(outer.contains([2, 7]));
        assert!(outer.contains([7, 7]));
        assert!(!outer.contains([5, 3]));

        let Some(inner) = flood_region(&candidate, [4, 2]) else {
            unreachable!("second seed lies on a candidate cell");
        };
        assert_eq!(inner.area(), 12);
        assert_eq!(inner.cells().first(), Some(&[4, 2]));
        assert!(inner.contains([7, 4]));

        assert!(flood_region(&candidate, [3, 3]).is_none());
        assert!(flood_region(&candidate, [-1, 2]).is_none());
    }

    // Tests the first seed's region is claimed when hostile-free
    // Verified by always preferring the smaller region
    #[test]
    fn test_resolve_claims_first_side() {
        let mut field = bordered_field();
        let resolution = resolve(&l_path(), &mut field, [5, 3]);

        let Resolution::Claimed { side, cells } = &resolution else {
            unreachable!("first region is hostile-free");
        };
        assert_eq!(*side, SeedSide::First);
        assert_eq!(cells.len(), 16);
        assert_eq!(field.unclaimed_count(), 20);
        assert!(field.is_claimed([2, 2]));
        assert!(field.is_claimed([6, 7]));
        assert!(field.is_unclaimed([3, 3]));
        assert!(field.is_unclaimed([5, 3]));
    }

    // Tests the second seed is used when the first region holds the hostile
    // Verified by claiming the first region regardless of the hostile
    #[test]
    fn test_resolve_falls_back_to_second_side() {
        let mut field = bordered_field();
        let resolution = resolve(&l_path(), &mut field, [2, 7]);

        assert!(matches!(
            resolution,
            Resolution::Claimed {
                side: SeedSide::Second,
                ..
            }
        ));
        assert_eq!(resolution.claimed_area(), 12);
        assert_eq!(field.unclaimed_count(), 24);
        assert!(field.is_claimed([4, 2]));
        assert!(field.is_unclaimed([2, 7]));
    }

    // Tests the second seed is still tried when the first is not a candidate
    // Verified by giving up after an unusable first seed
    #[test]
    fn test_resolve_second_side_when_first_seed_off_candidates() {
        let Ok(mut field) = Field::new(10, 10, 1) else {
            unreachable!("10x10 field with border 1 should be valid");
        };
        let path = Path::from_vertices(vec![[1, 3], [1, 5], [8, 5]]);
        assert_eq!(
            seed_cells(&path, 10, 10).map(|s| s.first),
            Some([0, 3])
        );

        let resolution = resolve(&path, &mut field, [7, 8]);

        assert!(matches!(
            resolution,
            Resolution::Claimed {
                side: SeedSide::Second,
                ..
            }
        ));
        assert_eq!(resolution.claimed_area(), 30);
        assert!(field.is_claimed([1, 1]));
        assert!(field.is_unclaimed([7, 8]));
    }

    // Tests a horizontal chord picks the side away from the hostile
    // Verified by swapping the seed order
    #[test]
    fn test_resolve_horizontal_chord() {
        let chord = Path::from_vertices(vec![[2, 4], [7, 4]]);

        let mut field = bordered_field();
        let upper = resolve(&chord, &mut field, [5, 6]);
        assert_eq!(upper.claimed_area(), 12);
        assert!(field.is_claimed([4, 3]));

        let mut field = bordered_field();
        let lower = resolve(&chord, &mut field, [4, 2]);
        assert_eq!(lower.claimed_area(), 18);
        assert!(field.is_claimed([4, 7]));
    }

    // Tests nothing changes when no hostile-free region exists
    // Verified by claiming the larger region as a fallback
    #[test]
    fn test_resolve_unresolved_leaves_field() {
        let mut field = bordered_field();
        let before = field.clone();
        let notch = Path::from_vertices(vec![[4, 2], [4, 3], [5, 3], [5, 2]]);

        let resolution = resolve(&notch, &mut field, [6, 6]);

        assert_eq!(resolution, Resolution::Unresolved);
        assert_eq!(resolution.claimed_area(), 0);
        assert_eq!(field, before);
    }

    // Tests resolution is a pure function of field, path and hostile
    // Verified by carrying state between calls
    #[test]
    fn test_resolve_deterministic() {
        let mut first = bordered_field();
        let mut second = bordered_field();

        let a = resolve(&l_path(), &mut first, [5, 3]);
        let b = resolve(&l_path(), &mut second, [5, 3]);

        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
