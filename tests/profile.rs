use loadprofile::{ControlPoint, Profile};

#[test]
fn committing_the_same_time_twice_updates_instead_of_duplicating() {
    let mut profile = Profile::new();
    profile.add_or_update(5.0, 2.0);
    profile.add_or_update(5.0, 3.0);

    let at_five: Vec<_> = profile.points().iter().filter(|p| p.time == 5.0).collect();
    assert_eq!(at_five.len(), 1);
    assert_eq!(at_five[0].current, 3.0);
}

#[test]
fn normalized_profiles_are_sorted_with_a_single_mirrored_horizon() {
    let profile = Profile::from_points(vec![
        ControlPoint::new(8.0, 1.0),
        ControlPoint::new(0.0, 0.0),
        ControlPoint::horizon(99.0),
        ControlPoint::new(2.0, 4.0),
    ]);

    let pts = profile.points();
    assert!(pts.windows(2).all(|w| w[0].time <= w[1].time));
    assert_eq!(pts.iter().filter(|p| p.is_horizon()).count(), 1);
    let horizon = pts.last().unwrap();
    assert!(horizon.is_horizon());
    assert_eq!(horizon.current, pts[pts.len() - 2].current);
    assert_eq!(horizon.current, 1.0);
}

#[test]
fn the_zero_time_point_cannot_be_removed() {
    let mut profile = Profile::new();
    profile.add_or_update(5.0, 2.0);
    let before = profile.len();

    assert!(!profile.remove(0));
    assert_eq!(profile.len(), before);
    assert_eq!(profile.points()[0], ControlPoint::new(0.0, 0.0));
}

#[test]
fn the_horizon_point_cannot_be_removed() {
    let mut profile = Profile::new();
    let last = profile.len() - 1;
    assert!(!profile.remove(last));
    assert_eq!(profile.len(), 2);
}

#[test]
fn add_update_remove_scenario() {
    let mut profile = Profile::new();
    assert_eq!(
        profile.points(),
        &[ControlPoint::new(0.0, 0.0), ControlPoint::horizon(0.0)]
    );

    profile.add_or_update(5.0, 2.0);
    assert_eq!(
        profile.points(),
        &[
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(5.0, 2.0),
            ControlPoint::horizon(2.0),
        ]
    );

    profile.add_or_update(5.0, 3.0);
    assert_eq!(
        profile.points(),
        &[
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(5.0, 3.0),
            ControlPoint::horizon(3.0),
        ]
    );

    assert!(profile.remove(1));
    assert_eq!(
        profile.points(),
        &[ControlPoint::new(0.0, 0.0), ControlPoint::horizon(0.0)]
    );
}

#[test]
fn normalize_settles_after_one_pass() {
    let mut profile = Profile::from_points(vec![
        ControlPoint::new(3.0, 1.0),
        ControlPoint::new(0.0, 0.0),
    ]);
    assert!(!profile.normalize());
    assert!(!profile.normalize());
}

#[test]
fn yaml_round_trip_preserves_the_horizon_sentinel() {
    let mut profile = Profile::new();
    profile.add_or_update(5.0, 2.0);

    let encoded = serde_yaml::to_string(&profile).unwrap();
    let decoded: Profile = serde_yaml::from_str(&encoded).unwrap();

    assert_eq!(decoded, profile);
    assert!(decoded.points().last().unwrap().is_horizon());
}
