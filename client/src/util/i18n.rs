//! Arabic/English string table.
//!
//! Every user-visible string goes through [`tr`] so the whole UI flips
//! language (and text direction) from one `UiState` field.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Display language. Arabic is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    /// Wire code sent as `lan` / `Accept-Language`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

/// Keys into the string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    DocumentTitle,
    AppTitle,
    EmptyQuestion,
    EmptyHeadline,
    EmptyHint,
    ComposerPlaceholder,
    SignInTitle,
    SignInSubtitle,
    EmailPlaceholder,
    PasswordPlaceholder,
    LoginButton,
    SignUpButton,
    CancelButton,
    LogoutButton,
    LoginOrSignUp,
    DefaultUser,
    InvalidEmailAddress,
    PasswordRule,
    EmailExists,
    PasswordTooWeak,
    InvalidEmailFormat,
    SignupSucceeded,
    LoginFailed,
    Farewell,
    AiWarning,
    NoTweets,
    UnknownAccount,
    DailyLimit,
    AnalysisFailed,
}

/// Look up `key` in `lang`.
#[must_use]
pub fn tr(lang: Language, key: Text) -> &'static str {
    let (ar, en) = match key {
        Text::DocumentTitle => ("TweetAI - تحليل تغريدات", "TweetAI - Tweet Analysis"),
        Text::AppTitle => ("TweetMind AI", "TweetMind AI"),
        Text::EmptyQuestion => ("هل واجهت شخصًا غريبًا اليوم؟", "Have you encountered someone strange today?"),
        Text::EmptyHeadline => (
            "هل ترغب أن أُطلعك على صورة شخصيته من تغريداته؟",
            "Want to see his personality through his tweets?",
        ),
        Text::EmptyHint => (
            "أدخل اسم المستخدم، ودعني أقرأ ما وراء التغريدات.",
            "Enter the username, and let me read between the tweets",
        ),
        Text::ComposerPlaceholder => ("ادخل اسم المستخدم", "Enter username"),
        Text::SignInTitle => ("تسجيل الدخول", "Sign In"),
        Text::SignInSubtitle => ("سجّل الدخول للمتابعة", "Sign in to continue the conversation"),
        Text::EmailPlaceholder => ("البريد الإلكتروني", "Email"),
        Text::PasswordPlaceholder => ("كلمة المرور", "Password"),
        Text::LoginButton => ("تسجيل الدخول", "Login"),
        Text::SignUpButton => ("إنشاء حساب", "Sign Up"),
        Text::CancelButton => ("إلغاء", "Cancel"),
        Text::LogoutButton => ("تسجيل الخروج", "Logout"),
        Text::LoginOrSignUp => (" تسجيل الدخول / إنشاء حساب", " Login / Sign Up"),
        Text::DefaultUser => ("User", "User"),
        Text::InvalidEmailAddress => (
            "يرجى إدخال بريد إلكتروني صحيح من Gmail أو Hotmail فقط (مثال: name@gmail.com).",
            "Please enter a valid Gmail or Hotmail address (e.g., name@gmail.com).",
        ),
        Text::PasswordRule => (
            "كلمة المرور يجب أن تحتوي على 8 خانات على الأقل، حرف كبير ورمز.",
            "Password must have at least 8 characters, one uppercase letter, and one symbol.",
        ),
        Text::EmailExists => ("هذا الحساب موجود فعلاً", "Email already exists"),
        Text::PasswordTooWeak => ("كلمة المرور ضعيفة جدًا", "Password is too weak"),
        Text::InvalidEmailFormat => ("تنسيق البريد الإلكتروني غير صحيح", "Invalid email format"),
        Text::SignupSucceeded => ("تم إنشاء الحساب بنجاح!", "Account created successfully!"),
        Text::LoginFailed => ("خطأ في البريد الإلكتروني أو كلمة المرور", "Invalid email or password"),
        Text::Farewell => ("👋 لقد تم تسجيل الخروج، إلى اللقاء!", "👋 You have been logged out, see you soon!"),
        Text::AiWarning => (
            "⚠️ هذا التحليل من الذكاء الصناعي وقد يكون صواب أو خطأ.",
            "⚠️ This analysis is AI-generated and may be correct or incorrect.",
        ),
        Text::NoTweets => ("لم أجد أي تغريدات لتحليل هذا الحساب.", "I couldn’t find any tweets for this account."),
        Text::UnknownAccount => (
            "هذا الحساب غير موجود أو لا يمكن الوصول إليه.",
            "This account doesn't exist or isn't accessible.",
        ),
        Text::DailyLimit => ("لقد تجاوزت الحد اليومي، حاول لاحقًا.", "You've reached your daily limit. Try again later."),
        Text::AnalysisFailed => (
            "حدث خطأ أثناء التحليل، حاول مجددًا.",
            "An error occurred during analysis. Please try again.",
        ),
    };
    match lang {
        Language::Ar => ar,
        Language::En => en,
    }
}

/// Generic "error: detail" line for failures without a dedicated message.
#[must_use]
pub fn error_with_detail(lang: Language, detail: &str) -> String {
    match lang {
        Language::Ar => format!("حدث خطأ: {detail}"),
        Language::En => format!("Error: {detail}"),
    }
}
