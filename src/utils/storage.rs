//! LocalStorage アクセス
//!
//! 保存リストとダークモードはこのトレイト経由で読み書きする。
//! テストでは `MemoryStorage` を差し込む。

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CareerError;

pub const SAVED_JOBS_KEY: &str = "savedJobs";
pub const DARK_MODE_KEY: &str = "darkMode";

/// 永続キーバリューストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CareerError>;
}

/// ブラウザの `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        window.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CareerError> {
        let storage = Self::storage()
            .ok_or_else(|| CareerError::Storage("localStorageが利用できません".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| CareerError::Storage(format!("{:?}", e)))
    }
}

/// メモリ上のストア
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CareerError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// ダークモード
// ============================================

/// 保存値が "true" のときだけ有効
pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    store.get(DARK_MODE_KEY).as_deref() == Some("true")
}

pub fn store_dark_mode(store: &dyn KeyValueStore, enabled: bool) -> Result<(), CareerError> {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
}
