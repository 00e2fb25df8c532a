//! Form elements and their type-specific configuration

use super::new_id;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of element type tags, as written in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Number,
    Email,
    Date,
    Tel,
    File,
    Textfield,
    Table,
}

impl ElementType {
    /// Every element type, in palette order
    pub const ALL: [ElementType; 12] = [
        Self::Text,
        Self::Textarea,
        Self::Textfield,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Number,
        Self::Email,
        Self::Date,
        Self::Tel,
        Self::File,
        Self::Table,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Number => "number",
            Self::Email => "email",
            Self::Date => "date",
            Self::Tel => "tel",
            Self::File => "file",
            Self::Textfield => "textfield",
            Self::Table => "table",
        }
    }

    /// Human readable name shown in the element palette
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Textarea",
            Self::Select => "Select Dropdown",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Group",
            Self::Number => "Number",
            Self::Email => "Email",
            Self::Date => "Date",
            Self::Tel => "Phone",
            Self::File => "File Upload",
            Self::Textfield => "Text Field",
            Self::Table => "Table",
        }
    }

    fn default_placeholder(&self) -> &'static str {
        match self {
            Self::Textarea => "Enter your message...",
            Self::File | Self::Textfield => "",
            _ => "Enter value...",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upload constraints for file elements.
///
/// Unset fields stay unset through a load/save cycle; the accessors supply
/// the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Accept pattern (`all`, `image/*`, `.pdf`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Maximum size in megabytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
}

impl FileConfig {
    pub fn accept(&self) -> &str {
        self.accept.as_deref().unwrap_or("all")
    }

    pub fn multiple(&self) -> bool {
        self.multiple.unwrap_or(false)
    }

    pub fn max_size(&self) -> u32 {
        self.max_size.unwrap_or(10)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            accept: Some("all".to_string()),
            multiple: Some(false),
            max_size: Some(10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
    #[serde(rename = "4xl")]
    Xl4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
    Extrabold,
}

/// Literal text block configuration for `textfield` elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl TextConfig {
    pub fn font_size(&self) -> FontSize {
        self.font_size.unwrap_or_default()
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight.unwrap_or_default()
    }

    /// Text to show; a renderer falls back to the element label when unset
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: Some(FontSize::Base),
            font_weight: Some(FontWeight::Normal),
            content: Some("Your text content here".to_string()),
        }
    }
}

/// Grid dimensions for `table` elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    pub rows: u32,
    pub columns: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<String>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            headings: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Display hint for choice elements, independent of the element kind
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<DisplayLayout>,
}

/// Element type together with the only configuration that type can carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Textarea,
    Number,
    Email,
    Date,
    Tel,
    Select { options: Option<Vec<String>> },
    Checkbox { options: Option<Vec<String>> },
    Radio { options: Option<Vec<String>> },
    File { config: Option<FileConfig> },
    TextField { config: Option<TextConfig> },
    Table { config: Option<TableConfig> },
}

impl ElementKind {
    /// Kind with the defaults a freshly added element of `element_type` gets
    pub fn default_for(element_type: ElementType) -> Self {
        let default_options = || Some(vec!["Option 1".to_string(), "Option 2".to_string()]);
        match element_type {
            ElementType::Text => Self::Text,
            ElementType::Textarea => Self::Textarea,
            ElementType::Number => Self::Number,
            ElementType::Email => Self::Email,
            ElementType::Date => Self::Date,
            ElementType::Tel => Self::Tel,
            ElementType::Select => Self::Select {
                options: default_options(),
            },
            ElementType::Radio => Self::Radio {
                options: default_options(),
            },
            ElementType::Checkbox => Self::Checkbox { options: None },
            ElementType::File => Self::File {
                config: Some(FileConfig::default()),
            },
            ElementType::Textfield => Self::TextField {
                config: Some(TextConfig::default()),
            },
            ElementType::Table => Self::Table { config: None },
        }
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text => ElementType::Text,
            Self::Textarea => ElementType::Textarea,
            Self::Number => ElementType::Number,
            Self::Email => ElementType::Email,
            Self::Date => ElementType::Date,
            Self::Tel => ElementType::Tel,
            Self::Select { .. } => ElementType::Select,
            Self::Checkbox { .. } => ElementType::Checkbox,
            Self::Radio { .. } => ElementType::Radio,
            Self::File { .. } => ElementType::File,
            Self::TextField { .. } => ElementType::Textfield,
            Self::Table { .. } => ElementType::Table,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Select { options } | Self::Checkbox { options } | Self::Radio { options } => {
                options.as_deref()
            }
            _ => None,
        }
    }

    pub fn file_config(&self) -> Option<&FileConfig> {
        match self {
            Self::File { config } => config.as_ref(),
            _ => None,
        }
    }

    pub fn text_config(&self) -> Option<&TextConfig> {
        match self {
            Self::TextField { config } => config.as_ref(),
            _ => None,
        }
    }

    pub fn table_config(&self) -> Option<&TableConfig> {
        match self {
            Self::Table { config } => config.as_ref(),
            _ => None,
        }
    }

    /// Replace the option list. Returns false if this kind has no options.
    fn set_options(&mut self, new_options: Vec<String>) -> bool {
        match self {
            Self::Select { options } | Self::Checkbox { options } | Self::Radio { options } => {
                *options = Some(new_options);
                true
            }
            _ => false,
        }
    }

    fn set_file_config(&mut self, new_config: FileConfig) -> bool {
        match self {
            Self::File { config } => {
                *config = Some(new_config);
                true
            }
            _ => false,
        }
    }

    fn set_text_config(&mut self, new_config: TextConfig) -> bool {
        match self {
            Self::TextField { config } => {
                *config = Some(new_config);
                true
            }
            _ => false,
        }
    }

    fn set_table_config(&mut self, new_config: TableConfig) -> bool {
        match self {
            Self::Table { config } => {
                *config = Some(new_config);
                true
            }
            _ => false,
        }
    }

    /// Assemble a kind from the flat persisted fields, dropping payloads
    /// that do not belong to `element_type`.
    fn from_record(record: &mut ElementRecord) -> Self {
        let options = record.options.take();
        let file_config = record.file_config.take();
        let text_config = record.text_config.take();
        let table_config = record.table_config.take();

        let mut kind = match record.element_type {
            ElementType::Text => Self::Text,
            ElementType::Textarea => Self::Textarea,
            ElementType::Number => Self::Number,
            ElementType::Email => Self::Email,
            ElementType::Date => Self::Date,
            ElementType::Tel => Self::Tel,
            ElementType::Select => Self::Select { options: None },
            ElementType::Checkbox => Self::Checkbox { options: None },
            ElementType::Radio => Self::Radio { options: None },
            ElementType::File => Self::File { config: None },
            ElementType::Textfield => Self::TextField { config: None },
            ElementType::Table => Self::Table { config: None },
        };

        let mut dropped = Vec::new();
        if let Some(options) = options {
            if !kind.set_options(options) {
                dropped.push("options");
            }
        }
        if let Some(config) = file_config {
            if !kind.set_file_config(config) {
                dropped.push("fileConfig");
            }
        }
        if let Some(config) = text_config {
            if !kind.set_text_config(config) {
                dropped.push("textConfig");
            }
        }
        if let Some(config) = table_config {
            if !kind.set_table_config(config) {
                dropped.push("tableConfig");
            }
        }
        if !dropped.is_empty() {
            tracing::debug!(
                "Dropping {:?} from {} element {}",
                dropped,
                record.element_type,
                record.id
            );
        }

        kind
    }
}

/// A single field or widget definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementRecord", into = "ElementRecord")]
pub struct Element {
    pub id: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub kind: ElementKind,
    pub display: Option<DisplayConfig>,
}

impl Element {
    /// Create an element of `element_type` with its default label, placeholder
    /// and configuration
    pub fn new(element_type: ElementType) -> Self {
        Self {
            id: new_id("element"),
            label: format!("{} Field", element_type.label()),
            placeholder: Some(element_type.default_placeholder().to_string()),
            required: false,
            kind: ElementKind::default_for(element_type),
            display: None,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }
}

/// Flat persisted shape of an element
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementRecord {
    id: String,
    #[serde(rename = "type")]
    element_type: ElementType,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file_config: Option<FileConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_config: Option<TextConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table_config: Option<TableConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_config: Option<DisplayConfig>,
}

impl From<ElementRecord> for Element {
    fn from(mut record: ElementRecord) -> Self {
        let kind = ElementKind::from_record(&mut record);
        Self {
            id: record.id,
            label: record.label,
            placeholder: record.placeholder,
            required: record.required,
            kind,
            display: record.display_config,
        }
    }
}

impl From<Element> for ElementRecord {
    fn from(element: Element) -> Self {
        let element_type = element.kind.element_type();
        let (options, file_config, text_config, table_config) = match element.kind {
            ElementKind::Select { options }
            | ElementKind::Checkbox { options }
            | ElementKind::Radio { options } => (options, None, None, None),
            ElementKind::File { config } => (None, config, None, None),
            ElementKind::TextField { config } => (None, None, config, None),
            ElementKind::Table { config } => (None, None, None, config),
            _ => (None, None, None, None),
        };
        Self {
            id: element.id,
            element_type,
            label: element.label,
            placeholder: element.placeholder,
            required: element.required,
            options,
            file_config,
            text_config,
            table_config,
            display_config: element.display,
        }
    }
}

/// Partial update merged into an element by `Form::update_element`.
///
/// Type-specific payloads are only applied when the element's kind can carry
/// them; the element type itself never changes. `placeholder` and `display`
/// take `Some(None)` to clear the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub label: Option<String>,
    pub placeholder: Option<Option<String>>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub file_config: Option<FileConfig>,
    pub text_config: Option<TextConfig>,
    pub table_config: Option<TableConfig>,
    pub display: Option<Option<DisplayConfig>>,
}

impl ElementPatch {
    pub fn apply(&self, element: &Element) -> Element {
        let mut next = element.clone();
        if let Some(label) = &self.label {
            next.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            next.placeholder.clone_from(placeholder);
        }
        if let Some(required) = self.required {
            next.required = required;
        }
        if let Some(display) = &self.display {
            next.display.clone_from(display);
        }

        let mut ignored = Vec::new();
        if let Some(options) = &self.options {
            if !next.kind.set_options(options.clone()) {
                ignored.push("options");
            }
        }
        if let Some(config) = &self.file_config {
            if !next.kind.set_file_config(config.clone()) {
                ignored.push("fileConfig");
            }
        }
        if let Some(config) = &self.text_config {
            if !next.kind.set_text_config(config.clone()) {
                ignored.push("textConfig");
            }
        }
        if let Some(config) = &self.table_config {
            if !next.kind.set_table_config(config.clone()) {
                ignored.push("tableConfig");
            }
        }
        if !ignored.is_empty() {
            tracing::debug!(
                "Ignoring {:?} for {} element {}",
                ignored,
                element.element_type(),
                element.id
            );
        }

        next
    }
}
