use simple_easing::*;

/// Represents a set of easing functions.
///
/// An easing function is a temporal function that takes a time between 0 and 1 (beginning / end)
/// and associates to it a number value according to an ease curve. The set is trimmed to the
/// families a decorative run actually uses: identity, quadratic, cubic, sine, plus a couple of
/// showy exits.
///
/// See <https://easings.net> for a representation of easing methods.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    // Applies no transformation (default).
    #[default]
    Linear,
    /// <https://easings.net/#easeInQuad>
    QuadIn,
    /// <https://easings.net/#easeInOutQuad>
    QuadInOut,
    /// <https://easings.net/#easeOutQuad>
    QuadOut,
    /// <https://easings.net/#easeInCubic>
    CubicIn,
    /// <https://easings.net/#easeInOutCubic>
    CubicInOut,
    /// <https://easings.net/#easeOutCubic>
    CubicOut,
    /// <https://easings.net/#easeInSine>
    SineIn,
    /// <https://easings.net/#easeInOutSine>
    SineInOut,
    /// <https://easings.net/#easeOutSine>
    SineOut,
    /// <https://easings.net/#easeOutExpo>
    ExpoOut,
    /// <https://easings.net/#easeOutBounce>
    BounceOut,
    /// <https://easings.net/#easeOutElastic>
    ElasticOut,
}

impl Easing {
    /// Call the easing function.
    pub(crate) fn call(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => quad_in(t),
            Easing::QuadInOut => quad_in_out(t),
            Easing::QuadOut => quad_out(t),
            Easing::CubicIn => cubic_in(t),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::CubicOut => cubic_out(t),
            Easing::SineIn => sine_in(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::SineOut => sine_out(t),
            Easing::ExpoOut => expo_out(t),
            Easing::BounceOut => bounce_out(t),
            Easing::ElasticOut => elastic_out(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_easing_approx_equal(easing: Easing, input: f32, expected: f32) {
        let result = easing.call(input);
        assert!(
            (result - expected).abs() < 1e-6,
            "Expected {}, got {}",
            expected,
            result
        );
    }

    #[test]
    fn test_linear() {
        assert_easing_approx_equal(Easing::Linear, 0.0, 0.0);
        assert_easing_approx_equal(Easing::Linear, 0.5, 0.5);
        assert_easing_approx_equal(Easing::Linear, 1.0, 1.0);
    }

    #[test]
    fn test_quad_out() {
        assert_easing_approx_equal(Easing::QuadOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::QuadOut, 0.5, 0.75);
        assert_easing_approx_equal(Easing::QuadOut, 1.0, 1.0);
    }

    #[test]
    fn test_quad_in_out() {
        assert_easing_approx_equal(Easing::QuadInOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::QuadInOut, 0.2, 0.08000);
        assert_easing_approx_equal(Easing::QuadInOut, 0.5, 0.5);
        assert_easing_approx_equal(Easing::QuadInOut, 0.8, 0.92);
        assert_easing_approx_equal(Easing::QuadInOut, 1.0, 1.0);
    }

    #[test]
    fn test_cubic_out() {
        assert_easing_approx_equal(Easing::CubicOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::CubicOut, 0.5, 0.875);
        assert_easing_approx_equal(Easing::CubicOut, 1.0, 1.0);
    }

    #[test]
    fn test_sine_in_out() {
        assert_easing_approx_equal(Easing::SineInOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::SineInOut, 0.2, 0.0954915);
        assert_easing_approx_equal(Easing::SineInOut, 0.5, 0.5);
        assert_easing_approx_equal(Easing::SineInOut, 0.8, 0.9045085);
        assert_easing_approx_equal(Easing::SineInOut, 1.0, 1.0);
    }

    #[test]
    fn test_expo_out() {
        assert_easing_approx_equal(Easing::ExpoOut, 0.0, 0.0);
        assert_easing_approx_equal(Easing::ExpoOut, 0.5, 0.96875);
        assert_easing_approx_equal(Easing::ExpoOut, 1.0, 1.0);
    }

    #[test]
    fn test_terminal_values() {
        // Every easing must pin its endpoints so runs start and finish on the exact
        // interpolation bounds.
        for easing in [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadInOut,
            Easing::QuadOut,
            Easing::CubicIn,
            Easing::CubicInOut,
            Easing::CubicOut,
            Easing::SineIn,
            Easing::SineInOut,
            Easing::SineOut,
            Easing::ExpoOut,
            Easing::BounceOut,
            Easing::ElasticOut,
        ] {
            assert_easing_approx_equal(easing, 0.0, 0.0);
            assert_easing_approx_equal(easing, 1.0, 1.0);
        }
    }
}
