//! Searchable, categorised emoji picker grid.
//!
//! The picker is pure state: the host draws [`EmojiPicker::rows`] and feeds
//! back search input, category clicks, hover and selection. Selecting an
//! entry only invokes the `on_select` callback with the raw token; closing
//! the picker is up to the caller.
//!
//! The skin-tone selector is tracked and exposed for drawing, but it is never
//! applied to the emitted token.

use crate::color::Rgba;
use crate::emoji_map::EmojiMap;
use crate::renderer::EmojiView;
use crate::resolve::{Resolver, ResolverConfig};
use crate::style::EmojiStyle;
use crate::token::{EmojiToken, HexVariant};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category id that disables category filtering.
pub const ALL_CATEGORY: &str = "all";

/// Glyph shown dimmed in the preview box when nothing is hovered.
pub const PREVIEW_PLACEHOLDER: &str = "😊";

/// Size of the hover preview in pixels.
pub const PREVIEW_SIZE: f32 = 32.0;

/// A category tab. Entries match when their asset path starts with `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl Category {
    #[must_use]
    pub fn new(id: &str, icon: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            icon: Some(icon.to_string()),
            label: Some(label.to_string()),
        }
    }

    /// The built-in tab set.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(ALL_CATEGORY, "🎯", "All"),
            Self::new("Smileys", "😊", "Smileys"),
            Self::new("People", "👋", "People"),
            Self::new("Animals", "🐱", "Animals"),
            Self::new("Food", "🍕", "Food"),
            Self::new("Activity", "⚽", "Activity"),
            Self::new("Travel", "✈️", "Travel"),
            Self::new("Objects", "💡", "Objects"),
            Self::new("Symbols", "❤️", "Symbols"),
        ]
    }

    /// Text drawn on the tab button: the icon, or the first letter of the id.
    #[must_use]
    pub fn button_text(&self) -> String {
        self.icon
            .clone()
            .unwrap_or_else(|| self.id.chars().take(1).collect())
    }

    /// Tooltip text: the label, or the id.
    #[must_use]
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Skin-tone swatch in the picker header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    #[default]
    None,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// Hex code point of the Fitzpatrick modifier.
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Light => Some("1f3fb"),
            Self::MediumLight => Some("1f3fc"),
            Self::Medium => Some("1f3fd"),
            Self::MediumDark => Some("1f3fe"),
            Self::Dark => Some("1f3ff"),
        }
    }

    #[must_use]
    pub const fn swatch(self) -> Rgba {
        match self {
            Self::None => Rgba::rgb(0xff, 0xb9, 0x30),
            Self::Light => Rgba::rgb(0xfa, 0xdc, 0xbc),
            Self::MediumLight => Rgba::rgb(0xe0, 0xbb, 0x95),
            Self::Medium => Rgba::rgb(0xbf, 0x8f, 0x68),
            Self::MediumDark => Rgba::rgb(0x9b, 0x64, 0x3d),
            Self::Dark => Rgba::rgb(0x59, 0x45, 0x39),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Default",
            Self::Light => "Light",
            Self::MediumLight => "Medium-Light",
            Self::Medium => "Medium",
            Self::MediumDark => "Medium-Dark",
            Self::Dark => "Dark",
        }
    }
}

/// Colour scheme of the picker chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerTheme {
    #[default]
    Dark,
    Light,
    /// Follow the host; draws with the dark palette unless the host overrides.
    Auto,
}

/// Concrete colours for a [`PickerTheme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerPalette {
    pub background: Rgba,
    pub border: Rgba,
    pub preview_background: Rgba,
    pub input_background: Rgba,
    pub input_focus: Rgba,
    pub text: Rgba,
    pub hover: Rgba,
    pub active: Rgba,
}

impl PickerTheme {
    #[must_use]
    pub const fn palette(self) -> PickerPalette {
        match self {
            Self::Light => PickerPalette {
                background: Rgba::WHITE,
                border: Rgba::rgb(0xe5, 0xe5, 0xe5),
                preview_background: Rgba::rgb(0xf5, 0xf5, 0xf5),
                input_background: Rgba::rgb(0xf5, 0xf5, 0xf5),
                input_focus: Rgba::rgb(0xeb, 0xeb, 0xeb),
                text: Rgba::rgb(0x1a, 0x1a, 0x1a),
                hover: Rgba::rgb(0xf0, 0xf0, 0xf0),
                active: Rgba::rgb(0x3b, 0x82, 0xf6),
            },
            Self::Dark | Self::Auto => PickerPalette {
                background: Rgba::rgb(0x1a, 0x1a, 0x1a),
                border: Rgba::rgb(0x33, 0x33, 0x33),
                preview_background: Rgba::rgb(0x2a, 0x2a, 0x2a),
                input_background: Rgba::rgb(0x2a, 0x2a, 0x2a),
                input_focus: Rgba::rgb(0x33, 0x33, 0x33),
                text: Rgba::WHITE,
                hover: Rgba::rgb(0x33, 0x33, 0x33),
                active: Rgba::rgb(0x3b, 0x82, 0xf6),
            },
        }
    }
}

/// Layout and chrome options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Panel width in pixels, read by the host when laying out the picker.
    pub width: f32,
    pub columns: usize,
    pub show_preview: bool,
    /// Let the host resize the picker horizontally instead of using `width`.
    pub dynamic_width: bool,
    /// Placeholder the host draws in the empty search field.
    pub search_placeholder: String,
    /// Height in pixels at which the host starts scrolling the grid.
    pub max_height: f32,
    pub theme: PickerTheme,
    pub show_footer: bool,
    pub emoji_size: f32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            width: 320.0,
            columns: 8,
            show_preview: true,
            dynamic_width: false,
            search_placeholder: "Search emojis...".to_string(),
            max_height: 280.0,
            theme: PickerTheme::Dark,
            show_footer: false,
            emoji_size: 24.0,
        }
    }
}

/// One selectable cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerEntry<'m> {
    pub token: &'m str,
    pub path: &'m str,
}

type SelectCallback<'m> = Box<dyn FnMut(&str) + 'm>;

/// Picker state.
pub struct EmojiPicker<'m> {
    entries: Vec<PickerEntry<'m>>,
    categories: Vec<Category>,
    options: PickerOptions,
    search: String,
    category: String,
    skin_tone: SkinTone,
    hovered: Option<String>,
    on_select: Option<SelectCallback<'m>>,
}

impl fmt::Debug for EmojiPicker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiPicker")
            .field("entries", &self.entries.len())
            .field("search", &self.search)
            .field("category", &self.category)
            .field("skin_tone", &self.skin_tone)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl Default for EmojiPicker<'static> {
    fn default() -> Self {
        Self::new(EmojiMap::builtin())
    }
}

impl<'m> EmojiPicker<'m> {
    /// Picker over the native entries of `map`, with default categories.
    #[must_use]
    pub fn new(map: &'m EmojiMap) -> Self {
        Self {
            entries: map
                .native_entries()
                .map(|(token, path)| PickerEntry { token, path })
                .collect(),
            categories: Category::defaults(),
            options: PickerOptions::default(),
            search: String::new(),
            category: ALL_CATEGORY.to_string(),
            skin_tone: SkinTone::None,
            hovered: None,
            on_select: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Register the selection callback.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&str) + 'm) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_skin_tone(&mut self, tone: SkinTone) {
        self.skin_tone = tone;
    }

    #[must_use]
    pub fn skin_tone(&self) -> SkinTone {
        self.skin_tone
    }

    /// Pointer entered (`Some`) or left (`None`) a cell.
    pub fn hover(&mut self, token: Option<&str>) {
        self.hovered = token.map(str::to_string);
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    fn matches(&self, entry: &PickerEntry<'_>) -> bool {
        if !self.search.is_empty()
            && !entry.token.contains(&self.search)
            && !entry
                .path
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        self.category == ALL_CATEGORY || entry.path.starts_with(&self.category)
    }

    /// Entries passing the search and category filters, in table order.
    #[must_use]
    pub fn filtered(&self) -> Vec<PickerEntry<'m>> {
        self.entries
            .iter()
            .filter(|entry| self.matches(entry))
            .copied()
            .collect()
    }

    /// Filtered entries laid out in rows of `columns`.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<PickerEntry<'m>>> {
        self.filtered()
            .chunks(self.options.columns.max(1))
            .map(<[PickerEntry<'m>]>::to_vec)
            .collect()
    }

    /// Whether the "No emojis found" message should be shown.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.entries.iter().any(|entry| self.matches(entry))
    }

    /// Emit `token` to the selection callback, unchanged.
    pub fn select(&mut self, token: &str) {
        if let Some(callback) = self.on_select.as_mut() {
            callback(token);
        }
    }

    /// Live preview of the hovered entry.
    #[must_use]
    pub fn preview(&self, resolver: &Resolver<'_>, style: EmojiStyle) -> Option<EmojiView> {
        if !self.options.show_preview {
            return None;
        }
        let token = EmojiToken::parse(self.hovered.as_deref()?)?;
        Some(EmojiView::resolve(token, style, resolver, PREVIEW_SIZE))
    }

    /// Direct image URL for a grid cell.
    ///
    /// Grid cells skip the fallback chain: the animated asset under the
    /// animated style, otherwise a single CDN image. `None` under the native
    /// style, where cells draw the glyph.
    #[must_use]
    pub fn grid_url(
        &self,
        entry: &PickerEntry<'_>,
        style: EmojiStyle,
        config: &ResolverConfig,
    ) -> Option<String> {
        let hex = crate::token::hex_id(entry.token, HexVariant::KeepSelector);
        match style {
            EmojiStyle::Native => None,
            EmojiStyle::Flexhunt => Some(config.animated_url(entry.path)),
            EmojiStyle::Apple | EmojiStyle::Google | EmojiStyle::Twitter | EmojiStyle::Facebook => {
                config.cdn_url(style, &hex)
            }
        }
    }

    /// Footer text, if the footer is enabled.
    #[must_use]
    pub fn footer(&self) -> Option<String> {
        self.options
            .show_footer
            .then(|| format!("{} emojis", self.filtered().len()))
    }
}
