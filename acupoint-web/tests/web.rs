#![cfg(target_arch = "wasm32")]

use acupoint_web::HandTrackerHandle;
use wasm_bindgen_test::*;

fn palm_flat() -> Vec<f32> {
    let mut data = vec![0.5, 0.9, 0.0];
    for i in 0..20 {
        let finger = (i / 4) as f32;
        let joint = (i % 4) as f32;
        data.extend([0.3 + 0.1 * finger, 0.7 - 0.1 * joint, -0.02 * (joint + 1.0)]);
    }
    data
}

#[wasm_bindgen_test]
fn handle_reports_palm_targets() {
    let mut handle = HandTrackerHandle::new(None).unwrap();
    assert!(handle.ingest(&palm_flat(), "Left").unwrap());
    assert_eq!(handle.orientation().as_deref(), Some("palm"));
    assert!(handle.target("PC8").unwrap().is_some());
    assert!(handle.target("LI4").unwrap().is_none());
    assert_eq!(handle.stabilized().unwrap().len(), 63);
}

#[wasm_bindgen_test]
fn handle_distinguishes_no_hand_from_bad_length() {
    let mut handle = HandTrackerHandle::new(Some(r#"{"mirror_handedness": true}"#.into())).unwrap();
    assert!(!handle.ingest(&[], "").unwrap());
    assert!(handle.ingest(&[0.1; 10], "Left").is_err());
    assert_eq!(handle.motion_state(), "uninitialized");
    assert!(handle.target("ST36").is_err());
}
