//! PDF 渲染服务
//!
//! 将简历与求职信文本逐行绘制到 US-Letter 页面上，光标越过底部边距时自动换页。
//! 不做自动换行：超出可打印宽度的行会被裁剪。

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::error::AppError;

/// PDF 文档标题
const DOC_TITLE: &str = "AI-Generated Job Application";

/// PDF 渲染服务
pub struct PdfService;

impl PdfService {
    /// 创建新的渲染服务
    pub fn new() -> Self {
        Self
    }

    /// 渲染求职申请 PDF，返回完整字节流
    pub fn render_application(&self, resume: &str, cover_letter: &str) -> Result<Vec<u8>, AppError> {
        // US-Letter 页面尺寸与布局常量（单位：点）
        let page_width = 612.0;
        let page_height = 792.0;
        let label_indent = 50.0;
        let body_indent = 60.0;
        let line_height = 15.0;
        let bottom_margin = 50.0;

        let (doc, page, layer) = PdfDocument::new(
            DOC_TITLE,
            Mm::from(Pt(page_width)),
            Mm::from(Pt(page_height)),
            "Layer 1",
        );

        let heading_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Pdf(e.to_string()))?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(page).get_layer(layer);

        // 固定标题
        layer.use_text(
            DOC_TITLE,
            14.0,
            Mm::from(Pt(label_indent)),
            Mm::from(Pt(page_height - 50.0)),
            &heading_font,
        );

        // 正文光标从标题下方开始
        let mut y = page_height - 100.0;

        // 简历部分
        layer.use_text(
            "Resume:",
            11.0,
            Mm::from(Pt(label_indent)),
            Mm::from(Pt(y)),
            &body_font,
        );
        y -= 20.0;

        for line in resume.lines() {
            layer.use_text(
                line,
                11.0,
                Mm::from(Pt(body_indent)),
                Mm::from(Pt(y)),
                &body_font,
            );
            y -= line_height;
            if y < bottom_margin {
                // 换页并把光标重置到顶部
                let (next_page, next_layer) = doc.add_page(
                    Mm::from(Pt(page_width)),
                    Mm::from(Pt(page_height)),
                    "Layer 1",
                );
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = page_height - bottom_margin;
            }
        }

        // 求职信部分
        y -= 30.0;
        layer.use_text(
            "Cover Letter:",
            11.0,
            Mm::from(Pt(label_indent)),
            Mm::from(Pt(y)),
            &body_font,
        );
        y -= 20.0;

        for line in cover_letter.lines() {
            layer.use_text(
                line,
                11.0,
                Mm::from(Pt(body_indent)),
                Mm::from(Pt(y)),
                &body_font,
            );
            y -= line_height;
            if y < bottom_margin {
                let (next_page, next_layer) = doc.add_page(
                    Mm::from(Pt(page_width)),
                    Mm::from(Pt(page_height)),
                    "Layer 1",
                );
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = page_height - bottom_margin;
            }
        }

        doc.save_to_bytes().map_err(|e| AppError::Pdf(e.to_string()))
    }
}

impl Default for PdfService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 统计字节序列出现次数
    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    /// 统计页对象数量
    ///
    /// 每个页对象含一个 /Page 名称；/Pages 根节点（及对它的引用键）
    /// 同时匹配两个计数，相减后正好剩下页数。
    fn page_count(bytes: &[u8]) -> usize {
        count_occurrences(bytes, b"/Page") - count_occurrences(bytes, b"/Pages")
    }

    #[test]
    fn test_empty_inputs_produce_valid_single_page() {
        let service = PdfService::new();
        let bytes = service.render_application("", "").unwrap();

        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_long_resume_spans_multiple_pages() {
        let service = PdfService::new();
        let resume = (1..=60)
            .map(|i| format!("Resume line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = service.render_application(&resume, "").unwrap();

        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
        assert!(page_count(&bytes) > 1);
    }

    #[test]
    fn test_short_inputs_fit_one_page() {
        let service = PdfService::new();
        let bytes = service
            .render_application("Skills: Rust\nExperience: 5 years", "Dear Hiring Manager,")
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 1);
    }
}
