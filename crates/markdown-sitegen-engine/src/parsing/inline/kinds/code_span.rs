/// Code span inline type with owned delimiter constant.
///
/// Code spans are resolved after bold and italic, so a backtick pair that
/// sits inside `**...**` stays part of the bold text.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
