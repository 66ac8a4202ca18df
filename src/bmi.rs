//! BMI formula, input validation and category bands.
//! Used by: handlers::bmi.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// Lower bounds are inclusive: 18.5 is Normal, 25 is Overweight, 30 is Obese.
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Category::Underweight
        } else if bmi < NORMAL_BELOW {
            Category::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: Category,
}

/// Height in meters, weight in kilograms. Both already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub height_m: f64,
    pub weight_kg: f64,
}

impl Measurements {
    pub fn from_fields(height: Option<&Value>, weight: Option<&Value>) -> Result<Self> {
        Ok(Self {
            height_m: parse_positive("height", height)?,
            weight_kg: parse_positive("weight", weight)?,
        })
    }

    pub fn compute(&self) -> Result<BmiResult> {
        let bmi = round2(self.weight_kg / (self.height_m * self.height_m));
        if !bmi.is_finite() {
            return Err(Error::NonFiniteResult {
                height: self.height_m,
                weight: self.weight_kg,
            });
        }
        Ok(BmiResult { bmi, category: Category::classify(bmi) })
    }
}

fn parse_positive(field: &str, value: Option<&Value>) -> Result<f64> {
    let number = match value {
        None | Some(Value::Null) => {
            return Err(Error::Validation(format!("{field} is required")));
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    let number =
        number.ok_or_else(|| Error::Validation(format!("{field} must be a number")))?;
    if !number.is_finite() || number <= 0.0 {
        return Err(Error::Validation(format!("{field} must be a positive number")));
    }
    Ok(number)
}

/// Values past 1e15 have no fractional digits left to round, and scaling them could overflow.
fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() > 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compute(height: Value, weight: Value) -> Result<BmiResult> {
        Measurements::from_fields(Some(&height), Some(&weight))?.compute()
    }

    #[test]
    fn average_adult_is_normal() {
        let result = compute(json!(1.8), json!(70)).unwrap();
        assert_eq!(result.bmi, 21.6);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn heavy_short_adult_is_obese() {
        let result = compute(json!(1.5), json!(90)).unwrap();
        assert_eq!(result.bmi, 40.0);
        assert_eq!(result.category, Category::Obese);
    }

    #[test]
    fn formula_matches_weight_over_height_squared() {
        for (h, w) in [(1.62, 55.0), (1.75, 82.3), (2.01, 120.0), (0.5, 3.2)] {
            let result = compute(json!(h), json!(w)).unwrap();
            let expected = w / (h * h);
            assert!((result.bmi - expected).abs() <= 0.005, "h={h} w={w}");
        }
    }

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(Category::classify(18.49), Category::Underweight);
        assert_eq!(Category::classify(18.5), Category::Normal);
        assert_eq!(Category::classify(24.99), Category::Normal);
        assert_eq!(Category::classify(25.0), Category::Overweight);
        assert_eq!(Category::classify(29.99), Category::Overweight);
        assert_eq!(Category::classify(30.0), Category::Obese);
    }

    #[test]
    fn exact_boundary_inputs() {
        // 2.0 m makes weight / 4 exact.
        assert_eq!(compute(json!(2.0), json!(74)).unwrap().category, Category::Normal);
        assert_eq!(compute(json!(2.0), json!(100)).unwrap().category, Category::Overweight);
        assert_eq!(compute(json!(2.0), json!(120)).unwrap().category, Category::Obese);
    }

    #[test]
    fn category_follows_rounded_value() {
        // 24.996 publishes as 25.0, which must read Overweight.
        let m = Measurements { height_m: 1.0, weight_kg: 24.996 };
        let result = m.compute().unwrap();
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, Category::Overweight);
    }

    #[test]
    fn numeric_strings_accepted() {
        let result = compute(json!(" 1.8 "), json!("70")).unwrap();
        assert_eq!(result.bmi, 21.6);
    }

    #[test]
    fn zero_height_rejected() {
        let err = compute(json!(0), json!(70)).unwrap_err();
        assert_eq!(err.to_string(), "height must be a positive number");
    }

    #[test]
    fn negative_weight_rejected() {
        let err = compute(json!(1.8), json!(-5)).unwrap_err();
        assert_eq!(err.to_string(), "weight must be a positive number");
    }

    #[test]
    fn missing_fields_rejected() {
        let err = Measurements::from_fields(None, Some(&json!(70))).unwrap_err();
        assert_eq!(err.to_string(), "height is required");
        let err = Measurements::from_fields(Some(&json!(1.8)), Some(&Value::Null)).unwrap_err();
        assert_eq!(err.to_string(), "weight is required");
    }

    #[test]
    fn non_numeric_rejected() {
        for bad in [json!("tall"), json!(true), json!([1.8]), json!({"m": 1.8}), json!("")] {
            let err = compute(bad.clone(), json!(70)).unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn non_finite_strings_rejected() {
        for bad in ["inf", "NaN", "-infinity"] {
            assert!(compute(json!(bad), json!(70)).is_err(), "{bad}");
        }
    }

    #[test]
    fn overflow_is_not_a_validation_error() {
        let err = compute(json!(1e-200), json!(1e200)).unwrap_err();
        assert!(matches!(err, Error::NonFiniteResult { .. }));
    }

    #[test]
    fn huge_finite_bmi_survives_rounding() {
        let result = compute(json!(1), json!(1e307)).unwrap();
        assert!(result.bmi.is_finite());
        assert_eq!(result.bmi, 1e307);
        assert_eq!(result.category, Category::Obese);
    }

    #[test]
    fn rounding_keeps_large_values_unchanged() {
        assert_eq!(round2(f64::MAX), f64::MAX);
        assert_eq!(round2(1e16 + 2.0), 1e16 + 2.0);
        assert_eq!(round2(123.456), 123.46);
    }

    #[test]
    fn category_serializes_as_label() {
        let json = serde_json::to_value(Category::Overweight).unwrap();
        assert_eq!(json, json!(Category::Overweight.label()));
    }
}
