//! Validation rules for form fields

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Значение должно разбираться как целое число
    pub integer: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            integer: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required non-negative number (цена, количество)
    pub const fn required_non_negative() -> Self {
        Self {
            required: true,
            min: Some(0.0),
            ..Self::none()
        }
    }

    /// Optional non-negative number
    pub const fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            ..Self::none()
        }
    }

    pub const fn integer(self) -> Self {
        Self {
            integer: true,
            ..self
        }
    }

    pub const fn max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} не может быть пустым", field_label));
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} должен содержать минимум {} символов",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} не должен превышать {} символов",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} должен быть не менее {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} должен быть не более {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Разбирает число из поля ввода и проверяет его.
    ///
    /// Пустое необязательное поле даёт `Ok(None)`.
    pub fn parse_number(&self, value: &str, field_label: &str) -> Result<Option<f64>, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} не может быть пустым", field_label));
            }
            return Ok(None);
        }

        let parsed = if self.integer {
            trimmed
                .parse::<i64>()
                .map(|v| v as f64)
                .map_err(|_| format!("{} должен быть целым числом", field_label))?
        } else {
            trimmed
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("{} должен быть числом", field_label))?
        };

        self.validate_number(parsed, field_label)?;
        Ok(Some(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Название").is_err());
        assert!(rules.validate_string("Phones", "Название").is_ok());
        assert!(ValidationRules::none().validate_string("", "Описание").is_ok());
    }

    #[test]
    fn test_parse_number() {
        let price = ValidationRules::required_non_negative();
        assert_eq!(price.parse_number("12,5", "Цена"), Ok(Some(12.5)));
        assert!(price.parse_number("", "Цена").is_err());
        assert!(price.parse_number("-1", "Цена").is_err());
        assert!(price.parse_number("abc", "Цена").is_err());

        let quantity = ValidationRules::non_negative().integer();
        assert_eq!(quantity.parse_number("", "Количество"), Ok(None));
        assert_eq!(quantity.parse_number("7", "Количество"), Ok(Some(7.0)));
        assert!(quantity.parse_number("7.5", "Количество").is_err());
    }

    #[test]
    fn test_max_bound() {
        let discount = ValidationRules::non_negative().max(100.0);
        assert!(discount.parse_number("150", "Скидка").is_err());
        assert_eq!(discount.parse_number("15", "Скидка"), Ok(Some(15.0)));
    }
}
