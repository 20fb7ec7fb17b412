use super::*;

#[test]
fn default_language_is_arabic() {
    assert_eq!(Language::default(), Language::Ar);
}

#[test]
fn language_codes_and_direction() {
    assert_eq!(Language::Ar.code(), "ar");
    assert_eq!(Language::En.code(), "en");
    assert_eq!(Language::Ar.dir(), "rtl");
    assert_eq!(Language::En.dir(), "ltr");
}

#[test]
fn toggled_flips_between_both_languages() {
    assert_eq!(Language::Ar.toggled(), Language::En);
    assert_eq!(Language::En.toggled().toggled(), Language::En);
}

#[test]
fn document_title_follows_language() {
    assert_eq!(tr(Language::Ar, Text::DocumentTitle), "TweetAI - تحليل تغريدات");
    assert_eq!(tr(Language::En, Text::DocumentTitle), "TweetAI - Tweet Analysis");
}

#[test]
fn farewell_strings() {
    assert_eq!(tr(Language::En, Text::Farewell), "👋 You have been logged out, see you soon!");
    assert_eq!(tr(Language::Ar, Text::Farewell), "👋 لقد تم تسجيل الخروج، إلى اللقاء!");
}

#[test]
fn login_and_signin_titles_differ_in_english_only() {
    assert_eq!(tr(Language::Ar, Text::LoginButton), tr(Language::Ar, Text::SignInTitle));
    assert_ne!(tr(Language::En, Text::LoginButton), tr(Language::En, Text::SignInTitle));
}

#[test]
fn error_with_detail_prefixes_per_language() {
    assert_eq!(error_with_detail(Language::En, "boom"), "Error: boom");
    assert_eq!(error_with_detail(Language::Ar, "boom"), "حدث خطأ: boom");
}
