//! Field kind enumeration for table columns

/// Тип значения колонки: определяет сравнение, фильтр и выравнивание
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,   // String, сравнение с учётом регистра отключено
    Number, // f64, диапазонный фильтр
    Date,   // DateTime<Utc>, фильтр "с даты"
    Tags,   // Vec<String>, фильтр по точному совпадению тега
    Bool,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Tags => "tags",
            Self::Bool => "bool",
        }
    }

    /// Числовые колонки выравниваются вправо
    pub fn align(&self) -> &'static str {
        match self {
            Self::Number => "right",
            _ => "left",
        }
    }
}

/// Какой виджет фильтра показывать в заголовке колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterWidget {
    #[default]
    None,
    Text,      // подстрока
    Select,    // точное совпадение из списка значений
    Range,     // min / max
    DateFrom,  // нижняя граница даты
}
