use super::*;
use crate::animation::descriptor::{Stagger, StaggerOrder};

#[test]
fn forward_ranks_follow_declaration_order() {
    assert_eq!(ranks(4, StaggerOrder::Forward), vec![0, 1, 2, 3]);
}

#[test]
fn from_edges_ranks_lead_at_the_edges() {
    assert_eq!(ranks(3, StaggerOrder::FromEdges), vec![0, 1, 0]);
    assert_eq!(ranks(5, StaggerOrder::FromEdges), vec![0, 1, 2, 1, 0]);
    assert_eq!(ranks(4, StaggerOrder::FromEdges), vec![0, 1, 1, 0]);
}

#[test]
fn from_center_ranks_lead_at_the_center() {
    assert_eq!(ranks(3, StaggerOrder::FromCenter), vec![1, 0, 1]);
    assert_eq!(ranks(5, StaggerOrder::FromCenter), vec![2, 1, 0, 1, 2]);
    assert_eq!(ranks(4, StaggerOrder::FromCenter), vec![1, 0, 0, 1]);
}

#[test]
fn zero_gap_passes_parent_progress_through() {
    assert_eq!(local_progress(0.37, 2, 3, 0.0), 0.37);
}

#[test]
fn local_windows_are_offset_and_compressed() {
    // gap 0.2, max rank 2: each rank's window is 0.6 long.
    assert_eq!(local_progress(0.0, 0, 2, 0.2), 0.0);
    assert_eq!(local_progress(0.6, 0, 2, 0.2), 1.0);
    assert_eq!(local_progress(0.2, 1, 2, 0.2), 0.0);
    assert_eq!(local_progress(0.5, 1, 2, 0.2), 0.5);
    assert_eq!(local_progress(1.0, 2, 2, 0.2), 1.0);
}

#[test]
fn from_edges_group_edges_never_trail_the_middle() {
    let group_ranks = ranks(3, StaggerOrder::FromEdges);
    let max_rank = *group_ranks.iter().max().unwrap();
    for i in 0..=20 {
        let parent = f64::from(i) / 20.0;
        let edge0 = local_progress(parent, group_ranks[0], max_rank, 0.3);
        let middle = local_progress(parent, group_ranks[1], max_rank, 0.3);
        let edge2 = local_progress(parent, group_ranks[2], max_rank, 0.3);
        assert!(edge0 >= middle);
        assert!(edge2 >= middle);
    }
}

#[test]
fn gap_validation_depends_on_order_policy() {
    let forward = Stagger {
        gap: 0.4,
        order: StaggerOrder::Forward,
    };
    // Ranks 0..=2: 2 * 0.4 < 1 holds for 3 targets but not 4.
    assert!(validate(3, forward).is_ok());
    assert!(validate(4, forward).is_err());

    let edges = Stagger {
        gap: 0.4,
        order: StaggerOrder::FromEdges,
    };
    // Max rank for 4 targets is 1 from the edges.
    assert!(validate(4, edges).is_ok());

    assert!(
        validate(
            2,
            Stagger {
                gap: f64::NAN,
                order: StaggerOrder::Forward
            }
        )
        .is_err()
    );
}
