//! User-visible strings in every supported language

use serde::{Deserialize, Serialize};

use crate::messages::PostOp;

/// Interface language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Keys for every translatable string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    CreateHeading,
    EditHeading,
    TitleLabel,
    BodyLabel,
    SubmitCreate,
    SubmitUpdate,
    Saving,
    CancelEdit,
    Loading,
    PostsHeading,
    NoPosts,
    SyncedAt,
    ConfirmDelete,
    ConfirmHint,
    FormIncomplete,
    HintNormal,
    HintEditing,
    HelpTitle,
    Help,
}

impl Locale {
    pub fn text(self, key: Text) -> &'static str {
        match self {
            Locale::En => en(key),
            Locale::Ru => ru(key),
        }
    }

    /// Prefix put in front of the error description for a failed operation
    pub fn error_prefix(self, op: PostOp) -> &'static str {
        match (self, op) {
            (Locale::En, PostOp::List) => "Failed to load posts: ",
            (Locale::En, PostOp::Create | PostOp::Update) => "Failed to save post: ",
            (Locale::En, PostOp::Delete) => "Failed to delete post: ",
            (Locale::Ru, PostOp::List) => "Ошибка при загрузке данных: ",
            (Locale::Ru, PostOp::Create | PostOp::Update) => "Ошибка при сохранении: ",
            (Locale::Ru, PostOp::Delete) => "Не удалось удалить пост: ",
        }
    }

    /// Full error line shown in the UI
    pub fn error_message(self, op: PostOp, detail: &str) -> String {
        format!("{}{}", self.error_prefix(op), detail)
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "Post manager",
        Text::CreateHeading => "Create a new post",
        Text::EditHeading => "Edit post",
        Text::TitleLabel => "Title",
        Text::BodyLabel => "Post text",
        Text::SubmitCreate => "s:Add",
        Text::SubmitUpdate => "s:Update",
        Text::Saving => "Saving...",
        Text::CancelEdit => "Esc:Cancel",
        Text::Loading => "Loading data...",
        Text::PostsHeading => "Posts",
        Text::NoPosts => "No posts. Press 'r' to reload.",
        Text::SyncedAt => "synced",
        Text::ConfirmDelete => "Are you sure you want to delete this post?",
        Text::ConfirmHint => "y:yes  n:no",
        Text::FormIncomplete => "Title and text are both required",
        Text::HintNormal => " Tab:panel | e:edit | s:save | d:delete | r:reload | ?:help | q:quit ",
        Text::HintEditing => " Esc:stop editing | Enter:new line in text | arrows:move cursor ",
        Text::HelpTitle => " Help ",
        Text::Help => HELP_EN,
    }
}

fn ru(key: Text) -> &'static str {
    match key {
        Text::AppTitle => "Управление постами",
        Text::CreateHeading => "Создать новый пост",
        Text::EditHeading => "Редактировать пост",
        Text::TitleLabel => "Заголовок",
        Text::BodyLabel => "Текст поста",
        Text::SubmitCreate => "s:Добавить",
        Text::SubmitUpdate => "s:Обновить",
        Text::Saving => "Сохранение...",
        Text::CancelEdit => "Esc:Отмена",
        Text::Loading => "Загрузка данных...",
        Text::PostsHeading => "Посты",
        Text::NoPosts => "Постов нет. Нажмите 'r' для загрузки.",
        Text::SyncedAt => "обновлено",
        Text::ConfirmDelete => "Вы уверены, что хотите удалить этот пост?",
        Text::ConfirmHint => "y:да  n:нет",
        Text::FormIncomplete => "Заполните заголовок и текст поста",
        Text::HintNormal => " Tab:панель | e:правка | s:сохранить | d:удалить | r:обновить | ?:справка | q:выход ",
        Text::HintEditing => " Esc:закончить ввод | Enter:новая строка в тексте | стрелки:курсор ",
        Text::HelpTitle => " Справка ",
        Text::Help => HELP_RU,
    }
}

const HELP_EN: &str = r#"
 NAVIGATION
   Tab / Shift+Tab    Switch panel (Title, Text, Posts)
   ↑ / ↓              Select post

 FORM
   e / Enter          Edit focused field
   Enter (editing)    New line in the text, finish the title
   Esc (editing)      Stop editing
   s                  Add post, or update the post being edited
   Esc                Cancel editing a post

 POSTS
   e / Enter          Edit selected post
   d                  Delete selected post
   r                  Reload list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit
"#;

const HELP_RU: &str = r#"
 НАВИГАЦИЯ
   Tab / Shift+Tab    Переключить панель (заголовок, текст, посты)
   ↑ / ↓              Выбрать пост

 ФОРМА
   e / Enter          Редактировать поле
   Enter (ввод)       Новая строка в тексте, завершить заголовок
   Esc (ввод)         Закончить ввод
   s                  Добавить пост или сохранить изменения
   Esc                Отменить редактирование

 ПОСТЫ
   e / Enter          Редактировать выбранный пост
   d                  Удалить выбранный пост
   r                  Обновить список

 ОБЩЕЕ
   ?                  Показать или скрыть справку
   q / Ctrl+C         Выход
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefixes_follow_operation() {
        assert_eq!(
            Locale::Ru.error_message(PostOp::List, "timeout"),
            "Ошибка при загрузке данных: timeout"
        );
        assert_eq!(
            Locale::Ru.error_prefix(PostOp::Create),
            Locale::Ru.error_prefix(PostOp::Update)
        );
        assert_eq!(
            Locale::En.error_message(PostOp::Delete, "boom"),
            "Failed to delete post: boom"
        );
    }

    #[test]
    fn test_locale_from_yaml() {
        let locale: Locale = serde_yaml::from_str("ru").unwrap();
        assert_eq!(locale, Locale::Ru);
    }
}
