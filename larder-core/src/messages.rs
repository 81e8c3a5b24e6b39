//! User-facing message table for the two supported locales.

use crate::types::Language;

/// A localizable user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    AppTitle,
    PantryHeading,
    EquipmentHeading,
    CondimentsHeading,
    PantryEmpty,
    PantryEmptyError,
    RecipeError,
    NoPendingRecipe,
    PrepTime,
    CookTime,
    TotalTime,
    Ingredients,
    Instructions,
    CookConfirmed,
    NothingConsumed,
}

impl Msg {
    /// Resolve the message text for a language.
    pub fn text(self, language: Language) -> &'static str {
        match language {
            Language::En => self.en(),
            Language::Zh => self.zh(),
        }
    }

    fn en(self) -> &'static str {
        match self {
            Msg::AppTitle => "Larder Recipe Generator",
            Msg::PantryHeading => "My Pantry",
            Msg::EquipmentHeading => "My Cooking Equipment",
            Msg::CondimentsHeading => "My Condiments & Spices",
            Msg::PantryEmpty => "Your pantry is empty. Add some ingredients to get started!",
            Msg::PantryEmptyError => "Your pantry is empty! Please add some ingredients first.",
            Msg::RecipeError => "Sorry, I couldn't come up with a recipe. Please try again.",
            Msg::NoPendingRecipe => "No recipe is waiting to be cooked. Generate one first.",
            Msg::PrepTime => "Prep Time",
            Msg::CookTime => "Cook Time",
            Msg::TotalTime => "Total Time",
            Msg::Ingredients => "Ingredients",
            Msg::Instructions => "Instructions",
            Msg::CookConfirmed => "Pantry updated. Removed:",
            Msg::NothingConsumed => "Cooked! No tracked pantry items matched this recipe.",
        }
    }

    fn zh(self) -> &'static str {
        match self {
            Msg::AppTitle => "Larder 食谱生成器",
            Msg::PantryHeading => "我的食品柜",
            Msg::EquipmentHeading => "我的烹饪设备",
            Msg::CondimentsHeading => "我的调料和香料",
            Msg::PantryEmpty => "您的食品柜是空的。添加一些食材开始吧！",
            Msg::PantryEmptyError => "您的食品柜是空的！请先添加一些食材。",
            Msg::RecipeError => "抱歉，无法生成食谱。请重试。",
            Msg::NoPendingRecipe => "没有待烹饪的食谱。请先生成一个。",
            Msg::PrepTime => "准备时间",
            Msg::CookTime => "烹饪时间",
            Msg::TotalTime => "总时间",
            Msg::Ingredients => "食材",
            Msg::Instructions => "步骤",
            Msg::CookConfirmed => "食品柜已更新。已移除：",
            Msg::NothingConsumed => "做好了！没有匹配到食品柜中的食材。",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_follow_the_selected_language() {
        assert_eq!(
            Msg::PantryEmptyError.text(Language::En),
            "Your pantry is empty! Please add some ingredients first."
        );
        assert_eq!(
            Msg::PantryEmptyError.text(Language::Zh),
            "您的食品柜是空的！请先添加一些食材。"
        );
    }

    #[test]
    fn every_message_has_both_locales() {
        const ALL: &[Msg] = &[
            Msg::AppTitle,
            Msg::PantryHeading,
            Msg::EquipmentHeading,
            Msg::CondimentsHeading,
            Msg::PantryEmpty,
            Msg::PantryEmptyError,
            Msg::RecipeError,
            Msg::NoPendingRecipe,
            Msg::PrepTime,
            Msg::CookTime,
            Msg::TotalTime,
            Msg::Ingredients,
            Msg::Instructions,
            Msg::CookConfirmed,
            Msg::NothingConsumed,
        ];

        for msg in ALL {
            assert!(!msg.text(Language::En).is_empty());
            assert!(!msg.text(Language::Zh).is_empty());
        }
    }
}
