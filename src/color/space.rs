//! CIE LCh (D65) to sRGB conversion with gamut mapping

/// D65 reference white
const XN: f64 = 0.95047;
const YN: f64 = 1.00000;
const ZN: f64 = 1.08883;

/// Lab companding breakpoint (6/29)
const DELTA: f64 = 6.0 / 29.0;

/// Slack allowed on linear channels before a color counts as out of gamut
const GAMUT_EPSILON: f64 = 1e-9;

/// Chroma reduction steps when mapping into the sRGB gamut
const GAMUT_SEARCH_STEPS: usize = 24;

fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// LCh -> Lab (a, b)
fn lch_to_lab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

/// Lab -> XYZ (D65)
fn lab_to_xyz(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    (XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz))
}

/// XYZ (D65) -> linear sRGB, unclamped
fn xyz_to_linear_srgb(x: f64, y: f64, z: f64) -> [f64; 3] {
    [
        3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
        -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
        0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
    ]
}

/// Linear sRGB -> XYZ (D65)
fn linear_srgb_to_xyz([r, g, b]: [f64; 3]) -> (f64, f64, f64) {
    (
        0.4124564 * r + 0.3575761 * g + 0.1804375 * b,
        0.2126729 * r + 0.7151522 * g + 0.0721750 * b,
        0.0193339 * r + 0.1191920 * g + 0.9503041 * b,
    )
}

/// 8-bit sRGB -> LCh, hue in [0, 360)
pub(crate) fn srgb8_to_lch(rgb: [u8; 3]) -> (f64, f64, f64) {
    let (x, y, z) = linear_srgb_to_xyz(rgb.map(decode_srgb));
    let (fx, fy, fz) = (lab_f(x / XN), lab_f(y / YN), lab_f(z / ZN));
    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);
    (l, a.hypot(b), b.atan2(a).to_degrees().rem_euclid(360.0))
}

/// LCh -> linear sRGB, unclamped
pub(crate) fn lch_to_linear_srgb(l: f64, c: f64, h: f64) -> [f64; 3] {
    let (l, a, b) = lch_to_lab(l, c, h);
    let (x, y, z) = lab_to_xyz(l, a, b);
    xyz_to_linear_srgb(x, y, z)
}

pub(crate) fn in_srgb_gamut(linear: [f64; 3]) -> bool {
    linear
        .iter()
        .all(|&v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v))
}

/// Linear light -> 8-bit sRGB, clamped
pub(crate) fn encode_srgb(linear: f64) -> u8 {
    let l = linear.clamp(0.0, 1.0);
    let s = if l <= 0.003_130_8 {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (s * 255.0).round().clamp(0.0, 255.0) as u8
}

/// 8-bit sRGB -> linear light
pub(crate) fn decode_srgb(value: u8) -> f64 {
    let s = value as f64 / 255.0;
    if s <= 0.04045 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Map LCh into sRGB: keep L and h, reduce chroma until in gamut, then clamp.
pub(crate) fn lch_to_srgb8(l: f64, c: f64, h: f64) -> [u8; 3] {
    let mut linear = lch_to_linear_srgb(l, c, h);

    if !in_srgb_gamut(linear) {
        let mut lo = 0.0;
        let mut hi = c;
        for _ in 0..GAMUT_SEARCH_STEPS {
            let mid = (lo + hi) * 0.5;
            if in_srgb_gamut(lch_to_linear_srgb(l, mid, h)) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        linear = lch_to_linear_srgb(l, lo, h);
    }

    linear.map(encode_srgb)
}
