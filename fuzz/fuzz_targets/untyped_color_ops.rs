#![no_main]

use colormath::{
    Hsla, Rgba, darken, desaturate, fade, fadeout, greyscale, hue, lighten, lightness, mix,
    saturate, saturation, spin,
};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fn amount_from(tag: u8) -> f64 {
    match tag % 6 {
        0 => 0.0,
        1 => 100.0,
        2 => -100.0,
        3 => f64::from(tag) - 128.0,
        4 => f64::from(tag) * 7.5,
        _ => f64::NAN,
    }
}

fn exercise(color: Rgba, tag: u8) {
    let amount = amount_from(tag);

    let _ = hue(color);
    let _ = saturation(color);
    let _ = lightness(color);

    for op in [saturate, desaturate, lighten, darken, greyscale, spin] {
        if let Ok(out) = op(color, amount) {
            assert!(out.to_array().iter().all(|v| v.is_finite()));
        }
    }

    for op in [fade, fadeout] {
        if let Ok(out) = op(color, amount) {
            assert!((0.0..=1.0).contains(&out.a()));
        }
    }

    let _ = color.to_hsla().to_rgba();
    let _ = mix(color, color, amount);
}

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let Some((&tag, json)) = data.split_first() else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<Value>(json) else {
        return;
    };

    if let Ok(color) = Rgba::try_from(&value) {
        exercise(color, tag);
    }

    if let Value::Array(values) = &value {
        if let Ok(hsl) = Hsla::from_values(values) {
            if let Ok(color) = hsl.to_rgba() {
                exercise(color, tag);
            }
        }
    }
});
