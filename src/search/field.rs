//! Field names shared with the portal's Solr schema.

pub const UID: &str = "uid";
pub const COMPANY_ID: &str = "companyId";
pub const GROUP_ID: &str = "groupId";
pub const LANGUAGE_ID: &str = "languageId";
pub const LOCALE: &str = "locale";
pub const TYPE: &str = "type";
pub const KEYWORD_SEARCH: &str = "keywordSearch";
pub const WORD: &str = "word";
pub const WEIGHT: &str = "weight";

/// `type` of dictionary words written for spell checking.
pub const SPELLCHECKING_TYPE: &str = "spellchecking";

/// `type` of indexed keyword queries used for completion.
pub const SUGGESTION_TYPE: &str = "suggestion";
