/// A language's translated strings, keyed by message id.
///
/// The table is opaque to the registry: it only holds a reference. Lookups
/// are linear, the tables are small.
#[derive(Debug)]
pub struct Translations {
    entries: &'static [(&'static str, &'static str)],
}

impl Translations {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Look up the string stored under `key`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==================== English Strings ====================

/// English strings (default language)
pub static ENGLISH: Translations = Translations::new(&[
    ("global.app.title", "gofire"),
    ("Login", "Log In"),
    ("Logout", "Log Out"),
    ("Username", "Username"),
    ("Password", "Password"),
    ("Forget Password", "Forget Password"),
    ("Two-Factor Authentication", "Two-Factor Authentication"),
    ("Settings", "Settings"),
    ("Language", "Language"),
    ("Default Currency", "Default Currency"),
    ("Exchange Rates Data", "Exchange Rates Data"),
    ("Unable to connect to server", "Unable to connect to server"),
]);

// ==================== Simplified Chinese Strings ====================

pub static SIMPLIFIED_CHINESE: Translations = Translations::new(&[
    ("global.app.title", "gofire"),
    ("Login", "登录"),
    ("Logout", "退出登录"),
    ("Username", "用户名"),
    ("Password", "密码"),
    ("Forget Password", "忘记密码"),
    ("Two-Factor Authentication", "两步验证"),
    ("Settings", "设置"),
    ("Language", "语言"),
    ("Default Currency", "默认货币"),
    ("Exchange Rates Data", "汇率数据"),
    ("Unable to connect to server", "无法连接到服务器"),
]);

// ==================== Vietnamese Strings ====================

pub static VIETNAMESE: Translations = Translations::new(&[
    ("global.app.title", "gofire"),
    ("Login", "Đăng nhập"),
    ("Logout", "Đăng xuất"),
    ("Username", "Tên người dùng"),
    ("Password", "Mật khẩu"),
    ("Forget Password", "Quên mật khẩu"),
    ("Two-Factor Authentication", "Xác thực hai yếu tố"),
    ("Settings", "Cài đặt"),
    ("Language", "Ngôn ngữ"),
    ("Default Currency", "Tiền tệ mặc định"),
    ("Exchange Rates Data", "Dữ liệu tỷ giá"),
    ("Unable to connect to server", "Không thể kết nối đến máy chủ"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_existing_key() {
        assert_eq!(ENGLISH.get("Login"), Some("Log In"));
        assert_eq!(SIMPLIFIED_CHINESE.get("Login"), Some("登录"));
        assert_eq!(VIETNAMESE.get("Login"), Some("Đăng nhập"));
    }

    #[test]
    fn test_get_missing_key() {
        assert_eq!(ENGLISH.get("No Such Key"), None);
        assert!(!ENGLISH.contains_key("No Such Key"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(ENGLISH.contains_key("Settings"));
        assert!(!ENGLISH.contains_key("settings"));
    }

    #[test]
    fn test_builtin_tables_have_same_keys() {
        let english: Vec<_> = ENGLISH.keys().collect();
        let chinese: Vec<_> = SIMPLIFIED_CHINESE.keys().collect();
        let vietnamese: Vec<_> = VIETNAMESE.keys().collect();
        assert_eq!(english, chinese);
        assert_eq!(english, vietnamese);
    }

    #[test]
    fn test_no_empty_values() {
        for table in [&ENGLISH, &SIMPLIFIED_CHINESE, &VIETNAMESE] {
            assert!(!table.is_empty());
            assert!(table.entries().iter().all(|(_, v)| !v.is_empty()));
        }
    }

    #[test]
    fn test_len_matches_entries() {
        assert_eq!(ENGLISH.len(), ENGLISH.entries().len());
        assert_eq!(Translations::new(&[]).len(), 0);
    }
}
