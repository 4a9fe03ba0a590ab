use ms_core::{Size, SurfaceParams, SurfaceRequest};
use ms_generate::{generate, request_for, Error};

fn chen_gackstatter(resolution: usize, parallel: bool, workers: usize) -> SurfaceRequest {
    SurfaceRequest {
        resolution,
        params: SurfaceParams::ChenGackstatter { parallel, workers },
    }
}

fn enneper(resolution: usize, order: u32) -> SurfaceRequest {
    SurfaceRequest {
        resolution,
        params: SurfaceParams::Enneper { order },
    }
}

#[test]
fn test_output_shape_is_square() {
    for request in [chen_gackstatter(10, false, 1), enneper(10, 1)] {
        let surface = generate(&request).unwrap();
        let expected = Size {
            width: 10,
            height: 10,
        };
        assert_eq!(surface.x.size(), expected);
        assert_eq!(surface.y.size(), expected);
        assert_eq!(surface.z.size(), expected);
    }
}

#[test]
fn test_titles() {
    let surface = generate(&chen_gackstatter(4, false, 1)).unwrap();
    assert_eq!(surface.title, "Chen-Gackstatter Minimal Surface");

    let surface = generate(&enneper(4, 3)).unwrap();
    assert_eq!(surface.title, "Enneper Minimal Surface (order 3)");
}

#[test]
fn test_rejects_low_resolution() {
    for request in [chen_gackstatter(1, true, 4), enneper(0, 1)] {
        match generate(&request) {
            Err(Error::InvalidArgument(msg)) => assert!(msg.contains("resolution")),
            other => panic!("expected InvalidArgument, got {:?}", other.map(|s| s.title)),
        }
    }
}

#[test]
fn test_rejects_zero_order() {
    match generate(&enneper(8, 0)) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("order")),
        other => panic!("expected InvalidArgument, got {:?}", other.map(|s| s.title)),
    }
}

#[test]
fn test_rejects_oversized_order() {
    // An order past the validation bound is rejected before any arithmetic
    // on 2n+1 can wrap.
    match generate(&enneper(8, 2_147_483_648)) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("order")),
        other => panic!("expected InvalidArgument, got {:?}", other.map(|s| s.title)),
    }
}

#[test]
fn test_rejects_zero_workers() {
    match generate(&chen_gackstatter(8, true, 0)) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("worker")),
        other => panic!("expected InvalidArgument, got {:?}", other.map(|s| s.title)),
    }
}

#[test]
fn test_rejects_unknown_surface_type() {
    match request_for("torus", 8, 1, true, 4) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("torus")),
        other => panic!(
            "expected InvalidArgument, got {:?}",
            other.map(|r| r.resolution)
        ),
    }
}

#[test]
fn test_selector_round_trip() {
    let request = request_for("enneper", 12, 2, true, 4).unwrap();
    assert!(matches!(
        request.params,
        SurfaceParams::Enneper { order: 2 }
    ));
    let request = request_for("chen-gackstatter", 12, 1, false, 2).unwrap();
    assert!(matches!(
        request.params,
        SurfaceParams::ChenGackstatter {
            parallel: false,
            workers: 2
        }
    ));
}

#[test]
fn test_parallel_and_sequential_agree() {
    let sequential = generate(&chen_gackstatter(9, false, 1)).unwrap();
    // One worker count that divides the rows evenly, one that does not.
    for workers in [3, 4] {
        let parallel = generate(&chen_gackstatter(9, true, workers)).unwrap();
        assert_eq!(sequential.x, parallel.x, "workers = {}", workers);
        assert_eq!(sequential.y, parallel.y, "workers = {}", workers);
        assert_eq!(sequential.z, parallel.z, "workers = {}", workers);
    }
}

#[test]
fn test_all_coordinates_finite() {
    let surface = generate(&chen_gackstatter(16, true, 4)).unwrap();
    for grid in [&surface.x, &surface.y, &surface.z] {
        assert!(grid.values().all(f64::is_finite));
    }
}
