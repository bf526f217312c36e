use crate::locale::Locale;

/**
 * Localized
 * 一个可展示字段：base 为基础语言（阿拉伯语，无后缀）的值，其余语言为可选替代值。
 *
 * Locale → 字段的映射由 `alternate` 的 match 在编译期确定。
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T: 'static> {
    pub base: T,
    pub en: Option<T>,
    pub es: Option<T>,
}

pub type LocalizedText = Localized<&'static str>;
pub type LocalizedList = Localized<&'static [&'static str]>;

/// Values that count as "not translated" when empty.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for &[T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Copy + Blank> Localized<T> {
    fn alternate(&self, locale: Locale) -> Option<T> {
        match locale {
            Locale::Ar => Some(self.base),
            Locale::En => self.en,
            Locale::Es => self.es,
        }
    }

    /// requested → English → base. The base value is returned as-is even
    /// when empty, so callers always get a value.
    pub fn get(&self, locale: Locale) -> T {
        if locale == Locale::BASE {
            return self.base;
        }
        self.alternate(locale)
            .into_iter()
            .chain(self.en)
            .find(|v| !v.is_blank())
            .unwrap_or(self.base)
    }
}

/// A static record that can be projected into an owned view for one locale.
pub trait Localize {
    type View;

    fn localize(&self, locale: Locale) -> Self::View;
}

pub fn localize_all<R: Localize>(records: &[&R], locale: Locale) -> Vec<R::View> {
    records.iter().map(|r| r.localize(locale)).collect()
}

pub fn owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
