/// Daily-change color bands consumed by the renderer. Thresholds are in
/// percentage points; losses mirror the gain bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    GainStrong,
    GainHigh,
    GainMedium,
    GainLow,
    GainFaint,
    Flat,
    LossFaint,
    LossLow,
    LossMedium,
    LossHigh,
    LossStrong,
}

/// Changes within this band of zero render as flat.
const FLAT_BAND: f64 = 0.05;

impl ColorClass {
    /// Map a daily percent change onto the threshold ladder. Non-finite
    /// changes (missing quotes) render as flat.
    pub fn from_change(change: f64) -> Self {
        if !change.is_finite() || change.abs() <= FLAT_BAND {
            return ColorClass::Flat;
        }
        if change > 0.0 {
            match change {
                c if c > 3.0 => ColorClass::GainStrong,
                c if c > 2.0 => ColorClass::GainHigh,
                c if c > 1.0 => ColorClass::GainMedium,
                c if c > 0.25 => ColorClass::GainLow,
                _ => ColorClass::GainFaint,
            }
        } else {
            match -change {
                c if c > 3.0 => ColorClass::LossStrong,
                c if c > 2.0 => ColorClass::LossHigh,
                c if c > 1.0 => ColorClass::LossMedium,
                c if c > 0.25 => ColorClass::LossLow,
                _ => ColorClass::LossFaint,
            }
        }
    }

    /// Stylesheet class name for this band.
    pub fn css_class(self) -> &'static str {
        match self {
            ColorClass::GainStrong => "gain-strong",
            ColorClass::GainHigh => "gain-high",
            ColorClass::GainMedium => "gain-medium",
            ColorClass::GainLow => "gain-low",
            ColorClass::GainFaint => "gain-faint",
            ColorClass::Flat => "flat",
            ColorClass::LossFaint => "loss-faint",
            ColorClass::LossLow => "loss-low",
            ColorClass::LossMedium => "loss-medium",
            ColorClass::LossHigh => "loss-high",
            ColorClass::LossStrong => "loss-strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_ladder_thresholds() {
        assert_eq!(ColorClass::from_change(3.5), ColorClass::GainStrong);
        assert_eq!(ColorClass::from_change(3.0), ColorClass::GainHigh);
        assert_eq!(ColorClass::from_change(2.5), ColorClass::GainHigh);
        assert_eq!(ColorClass::from_change(1.5), ColorClass::GainMedium);
        assert_eq!(ColorClass::from_change(0.5), ColorClass::GainLow);
        assert_eq!(ColorClass::from_change(0.1), ColorClass::GainFaint);
    }

    #[test]
    fn loss_ladder_mirrors_gains() {
        assert_eq!(ColorClass::from_change(-3.5), ColorClass::LossStrong);
        assert_eq!(ColorClass::from_change(-2.5), ColorClass::LossHigh);
        assert_eq!(ColorClass::from_change(-1.5), ColorClass::LossMedium);
        assert_eq!(ColorClass::from_change(-0.5), ColorClass::LossLow);
        assert_eq!(ColorClass::from_change(-0.1), ColorClass::LossFaint);
    }

    #[test]
    fn near_zero_and_non_finite_are_flat() {
        assert_eq!(ColorClass::from_change(0.0), ColorClass::Flat);
        assert_eq!(ColorClass::from_change(0.04), ColorClass::Flat);
        assert_eq!(ColorClass::from_change(-0.04), ColorClass::Flat);
        assert_eq!(ColorClass::from_change(f64::NAN), ColorClass::Flat);
        assert_eq!(ColorClass::from_change(f64::INFINITY), ColorClass::Flat);
    }

    #[test]
    fn css_classes_are_stable() {
        assert_eq!(ColorClass::from_change(4.0).css_class(), "gain-strong");
        assert_eq!(ColorClass::from_change(-0.3).css_class(), "loss-low");
        assert_eq!(ColorClass::Flat.css_class(), "flat");
    }
}
