//! 求职材料格式化服务
//!
//! 将一次补全输出按固定标记拆分为简历与求职信两部分。

use crate::models::GeneratedApplication;

/// 分节标记，仅取首次出现的位置
const SECTION_MARKER: &str = "Cover Letter:";

/// 简历部分的装饰标题
const RESUME_HEADER: &str = "📄 Tailored Resume\n\n";

/// 求职信部分的装饰标题
const COVER_LETTER_HEADER: &str = "✉️ Cover Letter\n\n";

/// 固定匹配分数（展示占位值，未做实际计算）
const MATCH_SCORE: u32 = 92;

/// 求职材料格式化服务
pub struct ApplicationService;

impl ApplicationService {
    /// 创建新的格式化服务
    pub fn new() -> Self {
        Self
    }

    /// 将补全输出拆分为简历与求职信
    ///
    /// 在首次出现 "Cover Letter:" 处拆分，两侧去除首尾空白；
    /// 未找到标记时两部分都使用完整文本。标记出现多次时，
    /// 后续出现的标记会原样保留在求职信文本中（启发式拆分，不是解析器）。
    pub fn format_application(&self, output: &str) -> GeneratedApplication {
        let (resume, cover_letter) = match output.split_once(SECTION_MARKER) {
            Some((before, after)) => (before.trim(), after.trim()),
            None => (output.trim(), output.trim()),
        };

        GeneratedApplication {
            resume: format!("{}{}", RESUME_HEADER, resume),
            cover_letter: format!("{}{}", COVER_LETTER_HEADER, cover_letter),
            match_score: MATCH_SCORE,
        }
    }
}

impl Default for ApplicationService {
    fn default() -> Self {
        Self::new()
    }
}
