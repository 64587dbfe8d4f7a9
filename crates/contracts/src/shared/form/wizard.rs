//! Состояние диалога добавления/редактирования с вкладками.
//!
//! Фазы: `Editing -> Validating -> Submitting -> Success | Failed`.
//! Правка любого поля в `Failed` возвращает форму в `Editing`.

use super::validation::ValidationErrors;
use crate::shared::error::AdminError;

/// Черновик формы, который умеет проверить себя и собрать тело запроса
pub trait FormDraft: Clone + Default {
    type Payload;

    /// Синхронная проверка. При успехе возвращает готовый payload.
    fn validate(&self) -> Result<Self::Payload, ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormWizard<D: FormDraft> {
    pub draft: D,
    pub errors: ValidationErrors,
    pub phase: FormPhase,
    tabs: &'static [&'static str],
    active_tab: usize,
}

impl<D: FormDraft> FormWizard<D> {
    pub fn new(tabs: &'static [&'static str]) -> Self {
        Self::with_draft(D::default(), tabs)
    }

    /// Открытие формы редактирования с заполненным черновиком
    pub fn with_draft(draft: D, tabs: &'static [&'static str]) -> Self {
        Self {
            draft,
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
            tabs,
            active_tab: 0,
        }
    }

    /// Правка поля: снимает ошибку поля и выводит форму из `Failed`
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
        self.errors.clear_field(field);
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Проверяет черновик и переводит форму в `Submitting`.
    ///
    /// `Ok(None)`, если отправка уже идёт. При ошибках проверки они остаются
    /// в `errors` и возвращаются как `AdminError::Validation`.
    pub fn begin_submit(&mut self) -> Result<Option<D::Payload>, AdminError> {
        if self.phase == FormPhase::Submitting {
            return Ok(None);
        }
        self.phase = FormPhase::Validating;
        match self.draft.validate() {
            Ok(payload) => {
                self.errors.clear();
                self.phase = FormPhase::Submitting;
                Ok(Some(payload))
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.phase = FormPhase::Editing;
                Err(AdminError::Validation(errors))
            }
        }
    }

    pub fn succeeded(&mut self) {
        self.phase = FormPhase::Success;
    }

    /// Ошибка отправки. Черновик и загруженные изображения остаются.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Failed(message.into());
    }

    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, FormPhase::Failed(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Сброс к пустому черновику (после успеха или отмены)
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.errors.clear();
        self.phase = FormPhase::Editing;
        self.active_tab = 0;
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == FormPhase::Success
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn tabs(&self) -> &'static [&'static str] {
        self.tabs
    }

    pub fn active_tab(&self) -> &'static str {
        self.tabs.get(self.active_tab).copied().unwrap_or_default()
    }

    /// Неизвестная вкладка игнорируется
    pub fn set_tab(&mut self, tab: &str) {
        if let Some(index) = self.tabs.iter().position(|t| *t == tab) {
            self.active_tab = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct NameDraft {
        name: String,
    }

    impl FormDraft for NameDraft {
        type Payload = String;

        fn validate(&self) -> Result<String, ValidationErrors> {
            let mut errors = ValidationErrors::new();
            if self.name.trim().is_empty() {
                errors.add("name", "Название обязательно");
            }
            if errors.is_empty() {
                Ok(self.name.trim().to_string())
            } else {
                Err(errors)
            }
        }
    }

    const TABS: &[&str] = &["basic", "images"];

    #[test]
    fn test_invalid_draft_produces_no_payload() {
        let mut wizard: FormWizard<NameDraft> = FormWizard::new(TABS);
        match wizard.begin_submit() {
            Err(AdminError::Validation(errors)) => assert!(errors.contains("name")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(wizard.errors.contains("name"));
        assert_eq!(wizard.phase, FormPhase::Editing);

        wizard.edit("name", |d| d.name = "Phones".into());
        assert!(!wizard.errors.contains("name"));
        assert_eq!(wizard.begin_submit(), Ok(Some("Phones".to_string())));
        assert!(wizard.is_submitting());
        // повторное нажатие во время отправки
        assert_eq!(wizard.begin_submit(), Ok(None));
    }

    #[test]
    fn test_failed_then_edit_returns_to_editing() {
        let mut wizard: FormWizard<NameDraft> = FormWizard::new(TABS);
        wizard.edit("name", |d| d.name = "x".into());
        assert!(wizard.begin_submit().is_ok());
        wizard.failed("HTTP 500");
        assert_eq!(wizard.error_message(), Some("HTTP 500"));

        wizard.edit("name", |d| d.name = "y".into());
        assert_eq!(wizard.phase, FormPhase::Editing);
        assert_eq!(wizard.draft.name, "y");
    }

    #[test]
    fn test_success_and_reset() {
        let mut wizard: FormWizard<NameDraft> = FormWizard::new(TABS);
        wizard.set_tab("images");
        wizard.edit("name", |d| d.name = "x".into());
        assert!(wizard.begin_submit().is_ok());
        wizard.succeeded();
        assert!(wizard.is_success());

        wizard.reset();
        assert_eq!(wizard.phase, FormPhase::Editing);
        assert!(wizard.draft.name.is_empty());
        assert_eq!(wizard.active_tab(), "basic");
    }

    #[test]
    fn test_set_tab() {
        let mut wizard: FormWizard<NameDraft> = FormWizard::new(TABS);
        wizard.set_tab("unknown");
        assert_eq!(wizard.active_tab(), "basic");
        wizard.set_tab("images");
        assert_eq!(wizard.active_tab(), "images");
    }
}
