//! The static message catalog.
//!
//! One entry per key, both translations side by side so a missing half is
//! impossible to merge in unnoticed. [`ALL_KEYS`] feeds the invariant test
//! that every registry message key resolves in both languages.

use crate::lang::Lang;

/// Every key the catalog knows, for exhaustiveness checks.
pub const ALL_KEYS: &[&str] = &[
    // Validation messages
    "required_field",
    "phone_error",
    "invalid_email",
    "invalid_url",
    "invalid_age",
    "age_range",
    "arabic_text_not_allowed",
    "english_letters_only",
    "arabic_letters_only",
    "invalid_price",
    "package_name_required",
    // Wizard chrome
    "next",
    "previous",
    "finish",
    "step_personal",
    "step_business",
    "step_branches",
    "step_competitors",
    "step_segments",
    "add_branch",
    "add_competitor",
    "add_segment",
    "remove_item",
    // Catalog editor
    "add_package",
    "edit_package",
    "delete_package",
    "confirm_delete_package",
    "add_feature",
    "remove_feature",
    // Contract page
    "contract_title",
    "generate_contract",
    "contract_saved",
];

/// Resolves `key` in the active language.
///
/// Unknown keys are echoed back verbatim so a missing translation shows up
/// as an identifier on screen instead of failing the render.
#[must_use]
pub fn translate(lang: Lang, key: &str) -> &str {
    match lookup(key) {
        Some((en, ar)) => match lang {
            Lang::En => en,
            Lang::Ar => ar,
        },
        None => key,
    }
}

/// Resolves `key` and substitutes `{name}` placeholders from `params`.
#[must_use]
pub fn translate_with(lang: Lang, key: &str, params: &[(&str, &str)]) -> String {
    let mut message = translate(lang, key).to_owned();
    for (name, value) in params {
        message = message.replace(&format!("{{{name}}}"), value);
    }
    message
}

#[allow(clippy::too_many_lines)]
fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    let entry = match key {
        // Validation messages
        "required_field" => ("This field is required", "هذا الحقل مطلوب"),
        "phone_error" => ("Invalid Egyptian mobile number", "رقم الموبايل المصري غير صحيح"),
        "invalid_email" => ("Invalid email address", "البريد الإلكتروني غير صحيح"),
        "invalid_url" => ("Invalid website address", "رابط الموقع غير صحيح"),
        "invalid_age" => ("Invalid age", "العمر غير صحيح"),
        "age_range" => ("Age must be between {min} and {max}", "العمر يجب أن يكون بين {min} و {max}"),
        "arabic_text_not_allowed" => {
            ("Arabic characters are not allowed here", "الأحرف العربية غير مسموح بها هنا")
        },
        "english_letters_only" => {
            ("This field accepts English letters only", "هذا الحقل يقبل الحروف الإنجليزية فقط")
        },
        "arabic_letters_only" => {
            ("This field accepts Arabic letters only", "هذا الحقل يقبل الحروف العربية فقط")
        },
        "invalid_price" => ("Price must be a number", "السعر يجب أن يكون رقمًا"),
        "package_name_required" => {
            ("Enter the package name in English or Arabic", "أدخل اسم الباقة بالإنجليزية أو العربية")
        },

        // Wizard chrome
        "next" => ("Next", "التالي"),
        "previous" => ("Previous", "السابق"),
        "finish" => ("Finish", "إنهاء"),
        "step_personal" => ("Personal Information", "البيانات الشخصية"),
        "step_business" => ("Business Information", "بيانات النشاط التجاري"),
        "step_branches" => ("Branches", "الفروع"),
        "step_competitors" => ("Competitors", "المنافسون"),
        "step_segments" => ("Target Segments", "الشرائح المستهدفة"),
        "add_branch" => ("Add branch", "إضافة فرع"),
        "add_competitor" => ("Add competitor", "إضافة منافس"),
        "add_segment" => ("Add segment", "إضافة شريحة"),
        "remove_item" => ("Remove", "حذف"),

        // Catalog editor
        "add_package" => ("Add package", "إضافة باقة"),
        "edit_package" => ("Edit package", "تعديل الباقة"),
        "delete_package" => ("Delete package", "حذف الباقة"),
        "confirm_delete_package" => {
            ("Delete this package? This cannot be undone.", "حذف هذه الباقة؟ لا يمكن التراجع عن ذلك.")
        },
        "add_feature" => ("Add feature", "إضافة ميزة"),
        "remove_feature" => ("Remove feature", "حذف الميزة"),

        // Contract page
        "contract_title" => ("Service Agreement", "اتفاقية تقديم خدمات"),
        "generate_contract" => ("Generate contract", "إنشاء العقد"),
        "contract_saved" => ("Contract terms saved", "تم حفظ بنود العقد"),

        _ => return None,
    };
    Some(entry)
}
