//! Per-language string tables.
//!
//! Tables are nested JSON objects addressed by dotted key paths
//! (`"auth.loginSuccess"`). Every key in the Arabic table (the default
//! language) should exist in every other table; this is a catalog
//! convention, not a runtime guarantee — lookup falls back to the raw
//! key path when a translation is missing.

use serde_json::{json, Value};

/// Arabic table (default language, RTL).
pub(super) fn arabic() -> Value {
    json!({
        "common": {
            "loading": "جاري التحميل...",
            "error": "خطأ",
            "success": "نجح",
            "cancel": "إلغاء",
            "save": "حفظ",
            "delete": "حذف",
            "edit": "تعديل",
            "add": "إضافة",
            "search": "بحث",
            "filter": "تصفية",
            "export": "تصدير",
            "import": "استيراد",
            "refresh": "تحديث",
            "back": "رجوع",
            "next": "التالي",
            "previous": "السابق",
            "submit": "إرسال",
            "reset": "إعادة تعيين",
            "clear": "مسح",
            "confirm": "تأكيد",
            "yes": "نعم",
            "no": "لا",
        },
        "auth": {
            "login": "تسجيل الدخول",
            "logout": "تسجيل الخروج",
            "username": "اسم المستخدم",
            "password": "كلمة المرور",
            "email": "البريد الإلكتروني",
            "rememberMe": "تذكرني",
            "forgotPassword": "نسيت كلمة المرور؟",
            "resetPassword": "إعادة تعيين كلمة المرور",
            "loginSuccess": "تم تسجيل الدخول بنجاح",
            "loginError": "فشل في تسجيل الدخول",
            "logoutSuccess": "تم تسجيل الخروج بنجاح",
            "invalidCredentials": "اسم المستخدم أو كلمة المرور غير صحيحة",
            "sessionExpired": "انتهت صلاحية الجلسة",
            "resetEmailSent": "تم إرسال رابط إعادة التعيين إلى بريدك الإلكتروني",
            "passwordResetSuccess": "تم إعادة تعيين كلمة المرور بنجاح",
            "showPassword": "إظهار كلمة المرور",
            "hidePassword": "إخفاء كلمة المرور",
            "enterCredentials": "يرجى إدخال بيانات الدخول للمتابعة",
        },
        "twoFactor": {
            "title": "التحقق الثنائي",
            "subtitle": "حماية إضافية لحسابك",
            "chooseMethod": "اختر طريقة التحقق",
            "chooseMethodHint": "يرجى اختيار الطريقة المفضلة لاستلام رمز التحقق",
            "enterCode": "أدخل رمز التحقق",
            "codeSentSms": "تم إرسال رمز التحقق إلى هاتفك",
            "codeSentEmail": "تم إرسال رمز التحقق إلى بريدك الإلكتروني",
            "useAuthenticator": "أدخل الرمز من تطبيق المصادقة",
            "useBackup": "أدخل أحد رموز الاحتياط المحفوظة",
            "invalidCode": "رمز التحقق غير صحيح. المحاولات المتبقية: {remaining}",
            "resendCode": "إعادة إرسال الرمز",
            "resendAvailableIn": "إعادة الإرسال متاحة خلال {countdown}",
            "changeMethod": "تغيير الطريقة",
            "verified": "تم التحقق بنجاح!",
            "methods": {
                "sms": "رسالة نصية (SMS)",
                "email": "البريد الإلكتروني",
                "authenticator": "تطبيق المصادقة",
                "backup": "رموز الاحتياط",
            },
        },
        "validation": {
            "required": "هذا الحقل مطلوب",
            "invalidEmail": "البريد الإلكتروني غير صحيح",
            "invalidPhone": "رقم الهاتف غير صحيح",
            "passwordTooShort": "كلمة المرور قصيرة جداً",
            "passwordsNotMatch": "كلمات المرور غير متطابقة",
            "invalidDate": "التاريخ غير صحيح",
            "invalidNumber": "الرقم غير صحيح",
            "maxLength": "تجاوز الحد الأقصى للأحرف",
            "minLength": "لم يتم الوصول للحد الأدنى للأحرف",
        },
        "errors": {
            "networkError": "خطأ في الاتصال بالشبكة",
            "serverError": "خطأ في الخادم",
            "notFound": "الصفحة غير موجودة",
            "unauthorized": "غير مخول للوصول",
            "forbidden": "غير مسموح",
            "validationError": "خطأ في التحقق من البيانات",
            "unknownError": "خطأ غير معروف",
        },
    })
}

/// English table (LTR).
pub(super) fn english() -> Value {
    json!({
        "common": {
            "loading": "Loading...",
            "error": "Error",
            "success": "Success",
            "cancel": "Cancel",
            "save": "Save",
            "delete": "Delete",
            "edit": "Edit",
            "add": "Add",
            "search": "Search",
            "filter": "Filter",
            "export": "Export",
            "import": "Import",
            "refresh": "Refresh",
            "back": "Back",
            "next": "Next",
            "previous": "Previous",
            "submit": "Submit",
            "reset": "Reset",
            "clear": "Clear",
            "confirm": "Confirm",
            "yes": "Yes",
            "no": "No",
        },
        "auth": {
            "login": "Login",
            "logout": "Logout",
            "username": "Username",
            "password": "Password",
            "email": "Email",
            "rememberMe": "Remember Me",
            "forgotPassword": "Forgot Password?",
            "resetPassword": "Reset Password",
            "loginSuccess": "Login successful",
            "loginError": "Login failed",
            "logoutSuccess": "Logout successful",
            "invalidCredentials": "Invalid username or password",
            "sessionExpired": "Session expired",
            "resetEmailSent": "Reset link sent to your email",
            "passwordResetSuccess": "Password reset successful",
            "showPassword": "Show Password",
            "hidePassword": "Hide Password",
            "enterCredentials": "Please enter your credentials to continue",
        },
        "twoFactor": {
            "title": "Two-Factor Verification",
            "subtitle": "Extra protection for your account",
            "chooseMethod": "Choose a verification method",
            "chooseMethodHint": "Please choose your preferred way to receive the verification code",
            "enterCode": "Enter the verification code",
            "codeSentSms": "A verification code was sent to your phone",
            "codeSentEmail": "A verification code was sent to your email",
            "useAuthenticator": "Enter the code from your authenticator app",
            "useBackup": "Enter one of your saved backup codes",
            "invalidCode": "Invalid verification code. Remaining attempts: {remaining}",
            "resendCode": "Resend code",
            "resendAvailableIn": "Resend available in {countdown}",
            "changeMethod": "Change method",
            "verified": "Verification successful!",
            "methods": {
                "sms": "Text message (SMS)",
                "email": "Email",
                "authenticator": "Authenticator app",
                "backup": "Backup codes",
            },
        },
        "validation": {
            "required": "This field is required",
            "invalidEmail": "Invalid email address",
            "invalidPhone": "Invalid phone number",
            "passwordTooShort": "Password is too short",
            "passwordsNotMatch": "Passwords do not match",
            "invalidDate": "Invalid date",
            "invalidNumber": "Invalid number",
            "maxLength": "Maximum length exceeded",
            "minLength": "Minimum length not met",
        },
        "errors": {
            "networkError": "Network connection error",
            "serverError": "Server error",
            "notFound": "Page not found",
            "unauthorized": "Unauthorized access",
            "forbidden": "Access forbidden",
            "validationError": "Data validation error",
            "unknownError": "Unknown error",
        },
    })
}
