//! Contract template bodies.
//!
//! The tokens are literal and case-sensitive; an embedding shell may edit
//! the stored terms but the tokens themselves are the substitution contract.

pub const TOKEN_DATE: &str = "[DATE]";
pub const TOKEN_START_DATE: &str = "[START DATE]";
pub const TOKEN_DURATION: &str = "[DURATION]";
pub const TOKEN_CLIENT_NAME: &str = "[Client Name]";

pub(crate) const TEMPLATE_EN: &str = "\
SERVICE AGREEMENT

This agreement is made on [DATE] between the Agency and [Client Name]
(the \"Client\").

1. Scope of Services
The Agency will provide the marketing services described in the selected
package and the agreed campaign plan.

2. Term
The engagement starts on [START DATE] and runs for [DURATION], renewing
only by written agreement of both parties.

3. Fees and Payment
Fees follow the selected package. Invoices are due within fourteen days
of issue.

4. Confidentiality
Each party will keep the other party's non-public information
confidential for the duration of this agreement and two years after.

5. Termination
Either party may terminate with thirty days' written notice. Work
completed before termination remains billable.

Signed,

The Agency                                   [Client Name]
";

pub(crate) const TEMPLATE_AR: &str = "\
اتفاقية تقديم خدمات

حُررت هذه الاتفاقية بتاريخ [DATE] بين الوكالة وبين [Client Name]
(\"العميل\").

١. نطاق الخدمات
تقدم الوكالة خدمات التسويق الموضحة في الباقة المختارة وخطة الحملة
المتفق عليها.

٢. المدة
يبدأ التعاقد في [START DATE] ويستمر لمدة [DURATION]، ولا يُجدد إلا
باتفاق كتابي من الطرفين.

٣. الأتعاب والسداد
تُحدد الأتعاب وفق الباقة المختارة، وتُسدد الفواتير خلال أربعة عشر يومًا
من تاريخ إصدارها.

٤. السرية
يلتزم كل طرف بالحفاظ على سرية معلومات الطرف الآخر غير المعلنة طوال مدة
الاتفاقية ولمدة سنتين بعد انتهائها.

٥. الإنهاء
يجوز لأي من الطرفين إنهاء الاتفاقية بإخطار كتابي مدته ثلاثون يومًا، مع
بقاء الأعمال المنجزة قبل الإنهاء مستحقة السداد.

التوقيعات،

الوكالة                                   [Client Name]
";
