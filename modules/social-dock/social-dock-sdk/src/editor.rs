//! Admin-side editing of the account list and the form fields it submits.
//!
//! This is the optimistic client model: rows are renumbered on every move or
//! delete so the submitted indices and `order` values look dense. The server
//! never relies on that and re-validates every submission on its own.

use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::models::{Platform, SettingsRecord, SocialAccount};

/// Top-level form namespace every settings field is nested under.
pub const FORM_NAMESPACE: &str = "social_dock_settings";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Platform and URL are both required")]
    MissingField,

    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("Not a valid URL: '{0}'")]
    InvalidUrl(String),

    #[error("Row {index} out of range (rows: {len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Id,
    Platform,
    Url,
    Enabled,
    Order,
}

impl AccountField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Platform => "platform",
            Self::Url => "url",
            Self::Enabled => "enabled",
            Self::Order => "order",
        }
    }
}

/// One editable row in the admin account list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRow {
    pub id: String,
    pub platform: Platform,
    pub url: String,
    pub enabled: bool,
    pub order: u32,
    field_index: usize,
}

impl AccountRow {
    /// Index embedded in this row's input names.
    #[must_use]
    pub fn field_index(&self) -> usize {
        self.field_index
    }

    #[must_use]
    pub fn field_name(&self, field: AccountField) -> String {
        format!(
            "{FORM_NAMESPACE}[social_accounts][{}][{}]",
            self.field_index,
            field.as_str()
        )
    }

    /// Form pairs for this row. Disabled rows omit `enabled`, like an unchecked checkbox.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            (self.field_name(AccountField::Id), self.id.clone()),
            (
                self.field_name(AccountField::Platform),
                self.platform.as_str().to_owned(),
            ),
            (self.field_name(AccountField::Url), self.url.clone()),
        ];
        if self.enabled {
            fields.push((self.field_name(AccountField::Enabled), "1".to_owned()));
        }
        fields.push((self.field_name(AccountField::Order), self.order.to_string()));
        fields
    }
}

/// Client-side model of the sortable account list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountListEditor {
    rows: Vec<AccountRow>,
}

impl AccountListEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows as currently stored; indices follow list position, `order` is kept as saved.
    #[must_use]
    pub fn from_accounts(accounts: &[SocialAccount]) -> Self {
        let rows = accounts
            .iter()
            .enumerate()
            .map(|(field_index, a)| AccountRow {
                id: a.id.clone(),
                platform: a.platform,
                url: a.url.clone(),
                enabled: a.enabled,
                order: a.order,
                field_index,
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a new enabled row at the next free index with `order` = row count.
    ///
    /// # Errors
    /// Returns an error if either input is blank, the platform is unknown or
    /// the URL does not parse.
    pub fn add(&mut self, platform: &str, url: &str) -> Result<&AccountRow, EditorError> {
        let platform = platform.trim();
        let url = url.trim();
        if platform.is_empty() || url.is_empty() {
            return Err(EditorError::MissingField);
        }
        let platform = Platform::from_key(platform)
            .ok_or_else(|| EditorError::UnknownPlatform(platform.to_owned()))?;
        Url::parse(url).map_err(|_| EditorError::InvalidUrl(url.to_owned()))?;

        let index = self.rows.len();
        self.rows.push(AccountRow {
            id: format!("account_{}", Uuid::new_v4().simple()),
            platform,
            url: url.to_owned(),
            enabled: true,
            order: u32::try_from(index).unwrap_or(u32::MAX),
            field_index: index,
        });
        Ok(&self.rows[index])
    }

    /// Drag-and-drop: move the row at `from` so it ends up at `to`, then renumber.
    ///
    /// # Errors
    /// Returns an error if either index is out of range.
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let len = self.rows.len();
        for index in [from, to] {
            if index >= len {
                return Err(EditorError::OutOfRange { index, len });
            }
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        self.reindex();
        Ok(())
    }

    /// Delete a row, then renumber the rest.
    ///
    /// # Errors
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<AccountRow, EditorError> {
        if index >= self.rows.len() {
            return Err(EditorError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let row = self.rows.remove(index);
        self.reindex();
        Ok(row)
    }

    /// # Errors
    /// Returns an error if `index` is out of range.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<(), EditorError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(EditorError::OutOfRange { index, len })?;
        row.enabled = enabled;
        Ok(())
    }

    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.rows.iter().flat_map(AccountRow::form_fields).collect()
    }

    fn reindex(&mut self) {
        for (position, row) in self.rows.iter_mut().enumerate() {
            row.field_index = position;
            row.order = u32::try_from(position).unwrap_or(u32::MAX);
        }
    }
}

/// Admin page tabs. Each submits the whole form, so fields it does not own
/// are carried as hidden inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Design,
    Accounts,
    Appearance,
}

impl SettingsTab {
    /// Top-level record fields edited by visible controls on this tab.
    #[must_use]
    pub const fn owned_fields(self) -> &'static [&'static str] {
        match self {
            Self::Design => &["active_design", "active_position"],
            Self::Accounts => &["social_accounts"],
            Self::Appearance => &[
                "icon_size",
                "icon_spacing",
                "icon_style",
                "link_target",
                "show_tooltip",
                "platform_colors",
            ],
        }
    }

    fn owns(self, field: &str) -> bool {
        self.owned_fields().contains(&field)
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "" }.to_owned()
}

/// Hidden inputs a tab must submit so the rest of the record survives the save.
#[must_use]
pub fn hidden_fields(record: &SettingsRecord, tab: SettingsTab) -> Vec<(String, String)> {
    let scalars = [
        ("active_design", record.active_design.as_str().to_owned()),
        ("active_position", record.active_position.as_str().to_owned()),
        ("icon_size", record.icon_size.to_string()),
        ("icon_spacing", record.icon_spacing.to_string()),
        ("icon_style", record.icon_style.as_str().to_owned()),
        ("link_target", record.link_target.as_str().to_owned()),
        ("show_tooltip", flag(record.show_tooltip)),
    ];

    let mut fields: Vec<(String, String)> = scalars
        .into_iter()
        .filter(|(key, _)| !tab.owns(key))
        .map(|(key, value)| (format!("{FORM_NAMESPACE}[{key}]"), value))
        .collect();

    if !tab.owns("platform_colors") {
        fields.extend(record.platform_colors.iter().map(|(slot, color)| {
            (
                format!("{FORM_NAMESPACE}[platform_colors][{slot}]"),
                color.clone(),
            )
        }));
    }

    if !tab.owns("social_accounts") {
        for (i, account) in record.social_accounts.iter().enumerate() {
            let prefix = format!("{FORM_NAMESPACE}[social_accounts][{i}]");
            fields.extend([
                (format!("{prefix}[id]"), account.id.clone()),
                (
                    format!("{prefix}[platform]"),
                    account.platform.as_str().to_owned(),
                ),
                (format!("{prefix}[url]"), account.url.clone()),
                (format!("{prefix}[enabled]"), flag(account.enabled)),
                (format!("{prefix}[order]"), account.order.to_string()),
            ]);
        }
    }

    fields
}
