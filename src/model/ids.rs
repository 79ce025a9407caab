use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let id = String::deserialize(deserializer)?;
                if id.is_empty() {
                    return Err(de::Error::custom(concat!(stringify!($name), " cannot be empty")));
                }
                Ok(Self(id))
            }
        }

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                let id = s.into();
                assert!(!id.is_empty(), "{} cannot be empty", stringify!($name));
                Self(id)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

id_newtype!(FolderId);
id_newtype!(TabId);

/// Id of the permanent "all folders" tab.
pub const MAIN_LIST_TAB_ID: &str = "folder-list-main";

impl TabId {
    /// The permanent folder-list tab id.
    pub fn main_list() -> Self {
        Self::new(MAIN_LIST_TAB_ID)
    }

    /// Deterministic tab id for a folder's detail tab: `folder-<id>`.
    pub fn for_folder(folder_id: &FolderId) -> Self {
        Self::new(format!("folder-{}", folder_id))
    }

    /// Id of the `seq`-th extra folder-list tab: `list-<seq>`. Kept out of
    /// the `folder-` namespace so it can never match a folder's tab.
    pub fn list(seq: u32) -> Self {
        Self::new(format!("list-{}", seq))
    }

    pub fn is_main_list(&self) -> bool {
        self.0 == MAIN_LIST_TAB_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "FolderId cannot be empty")]
    fn folder_id_empty_string_panics() {
        FolderId::new("");
    }

    #[test]
    #[should_panic(expected = "TabId cannot be empty")]
    fn tab_id_empty_string_panics() {
        TabId::new("");
    }

    #[test]
    fn folder_tab_id_is_prefixed() {
        let id = TabId::for_folder(&FolderId::new("f1"));
        assert_eq!(id.as_str(), "folder-f1");
        assert!(!id.is_main_list());
    }

    #[test]
    fn main_list_tab_id_is_fixed() {
        assert_eq!(TabId::main_list().as_str(), "folder-list-main");
        assert!(TabId::main_list().is_main_list());
    }

    #[test]
    fn list_tab_ids_never_collide_with_main() {
        assert_eq!(TabId::list(1).as_str(), "list-1");
        assert!(!TabId::list(1).is_main_list());
    }

    #[test]
    fn list_tab_id_differs_from_lookalike_folder_tab() {
        let folder_tab = TabId::for_folder(&FolderId::new("list-1"));
        assert_ne!(folder_tab, TabId::list(1));
    }

    #[test]
    fn deserialize_rejects_empty_id() {
        let err = serde_json::from_str::<FolderId>("\"\"").unwrap_err();
        assert!(err.to_string().contains("FolderId cannot be empty"));
    }

    #[test]
    fn deserialize_accepts_non_empty_id() {
        let id: FolderId = serde_json::from_str("\"f3\"").unwrap();
        assert_eq!(id.as_str(), "f3");
    }

    #[test]
    fn folder_id_from_str() {
        let id: FolderId = "f7".into();
        assert_eq!(id.as_str(), "f7");
    }
}
