//! Facade error paths build `JsValue`s, so these only run under wasm
//! (`wasm-pack test --node`).
#![cfg(target_arch = "wasm32")]

use particula_rope::{Rope, RopeBatch};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn invalid_config_json_is_rejected() {
    assert!(Rope::with_config_json("{ \"stiffness\": -1 }".to_string()).is_err());
    assert!(Rope::with_config_json("nope".to_string()).is_err());

    let mut rope = Rope::new();
    assert!(rope.load_config_json("{ \"restLength\": 0 }".to_string()).is_err());
}

#[wasm_bindgen_test]
fn valid_config_json_builds_rope() {
    let mut rope = Rope::with_config_json("{ \"segmentCount\": 4 }".to_string()).unwrap();
    rope.set_start(0.0, 0.0, 0.0);
    rope.set_end(10.0, 0.0, 0.0);
    assert!(rope.tick_render());
    assert_eq!(rope.point_count(), 5);

    let mut batch = RopeBatch::new();
    assert!(batch.add_rope_with_config_json("{ \"damping\": -2 }".to_string()).is_err());
    assert_eq!(batch.add_rope_with_config_json("{}".to_string()).unwrap(), 0);
}
