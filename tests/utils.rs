pub fn assert_float_eq_f64(x: f64, reference: f64) {
    assert!(
        (x - reference).abs() < 1e-12,
        "floats not almost equal.\nleft:  {}\nright: {}",
        x,
        reference
    );
}
