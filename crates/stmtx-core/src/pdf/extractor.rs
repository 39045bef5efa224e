//! PDF page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{split_lines, PageSource, Result};
use crate::error::PdfError;

/// Page text reader for PDF statements.
///
/// lopdf opens and, if needed, decrypts the document; pdf-extract then lays
/// out the text of each page.
pub struct PdfExtractor {
    password: String,
    page_count: u32,
    pages: Vec<String>,
}

impl PdfExtractor {
    /// Create an extractor that tries an empty password on encrypted files.
    pub fn new() -> Self {
        Self {
            password: String::new(),
            page_count: 0,
            pages: Vec::new(),
        }
    }

    /// Set the password tried on encrypted documents.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Parse, decrypt and extract the text of every page.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            doc.decrypt(self.password.as_str())
                .map_err(|e| PdfError::Encrypted(e.to_string()))?;
            debug!("Decrypted PDF with configured password");

            // pdf-extract reads bytes, so hand it the decrypted document
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        self.page_count = doc.get_pages().len() as u32;
        self.pages = if self.page_count == 0 {
            Vec::new()
        } else {
            pdf_extract::extract_text_from_mem_by_pages(&raw_data)
                .map_err(|e| PdfError::TextExtraction(e.to_string()))?
        };

        debug!("Loaded PDF with {} pages", self.page_count);
        Ok(())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_lines(&self, page: u32) -> Result<Vec<String>> {
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page));
        }

        let text = self.pages.get((page - 1) as usize).ok_or_else(|| {
            PdfError::TextExtraction(format!("page {} has no text layer", page))
        })?;

        Ok(split_lines(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::encryption::{decrypt_object, get_encryption_key};
    use lopdf::{dictionary, Object, Stream};

    /// Build a document with one page per content stream.
    fn document_with_pages(contents: &[&str]) -> Document {
        let mut doc = Document::with_version("1.5");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let pages_id = doc.new_object_id();

        let mut kids = Vec::new();
        for content in contents {
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.as_bytes().to_vec()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
                "Contents" => Object::Reference(content_id),
                "Resources" => dictionary! {
                    "Font" => dictionary! {
                        "F1" => Object::Reference(font_id),
                    },
                },
            });
            kids.push(Object::Reference(page_id));
        }

        let count = Object::Integer(kids.len() as i64);
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));
        doc
    }

    fn save(mut doc: Document) -> Vec<u8> {
        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    fn pdf_with_pages(contents: &[&str]) -> Vec<u8> {
        save(document_with_pages(contents))
    }

    /// RC4 (V4/R4) encryption under the empty user password. With `user_check`
    /// set, `/U` holds that value instead of being left out, so a wrong value
    /// makes the empty password fail.
    fn encrypted_pdf(contents: &[&str], user_check: Option<Vec<u8>>) -> Vec<u8> {
        let mut doc = document_with_pages(contents);

        let mut encrypt = dictionary! {
            "Filter" => "Standard",
            "V" => Object::Integer(4),
            "R" => Object::Integer(4),
            "Length" => Object::Integer(128),
            "O" => Object::string_literal(vec![0x5a_u8; 32]),
            "P" => Object::Integer(-4),
            "CF" => dictionary! {
                "StdCF" => dictionary! {
                    "CFM" => "V2",
                    "Length" => Object::Integer(16),
                    "AuthEvent" => "DocOpen",
                },
            },
            "StmF" => "StdCF",
            "StrF" => "StdCF",
        };
        if let Some(check) = user_check {
            encrypt.set("U", Object::string_literal(check));
        }
        let encrypt_id = doc.add_object(encrypt);

        let file_id = b"stmtx-test-file!".to_vec();
        doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
        doc.trailer.set(
            "ID",
            vec![
                Object::string_literal(file_id.clone()),
                Object::string_literal(file_id),
            ],
        );

        // RC4 is symmetric, so decrypting plain content encrypts it
        let key = get_encryption_key(&doc, "", false).unwrap();
        for (&id, obj) in doc.objects.iter_mut() {
            if id == encrypt_id {
                continue;
            }
            let Ok(content) = decrypt_object(&key, id, &*obj, false) else {
                continue;
            };
            match obj {
                Object::Stream(stream) => stream.set_content(content),
                Object::String(text, _) => *text = content,
                _ => {}
            }
        }

        save(doc)
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.page_count(), 0);
        assert!(matches!(extractor.page_lines(1), Err(PdfError::InvalidPage(1))));
    }

    #[test]
    fn test_rejects_non_pdf() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_loads_pages_in_order() {
        let data = pdf_with_pages(&[
            "BT /F1 12 Tf 72 720 Td (JAN 5 JAN 6 COFFEE SHOP $4.50) Tj ET",
            "BT /F1 12 Tf 72 720 Td (FEB 1 FEB 2 BOOKSTORE $12.00) Tj ET",
        ]);

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(extractor.page_count(), 2);

        let first = extractor.page_lines(1).unwrap().join("\n");
        let second = extractor.page_lines(2).unwrap().join("\n");
        assert!(first.contains("COFFEE"), "page 1 text: {first:?}");
        assert!(second.contains("BOOKSTORE"), "page 2 text: {second:?}");
        assert!(matches!(extractor.page_lines(3), Err(PdfError::InvalidPage(3))));
    }

    #[test]
    fn test_decrypts_with_empty_password() {
        let data = encrypted_pdf(
            &["BT /F1 12 Tf 72 720 Td (JAN 5 JAN 6 COFFEE SHOP $4.50) Tj ET"],
            None,
        );
        assert!(!String::from_utf8_lossy(&data).contains("COFFEE"));

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(extractor.page_count(), 1);

        let lines = extractor.page_lines(1).unwrap();
        assert!(
            lines.iter().any(|l| l.trim() == "JAN 5 JAN 6 COFFEE SHOP $4.50"),
            "page 1 lines: {lines:?}"
        );
    }

    #[test]
    fn test_wrong_password_is_fatal() {
        let data = encrypted_pdf(
            &["BT /F1 12 Tf 72 720 Td (JAN 5 JAN 6 COFFEE SHOP $4.50) Tj ET"],
            Some(vec![0_u8; 32]),
        );

        let mut extractor = PdfExtractor::new();
        let err = extractor.load(&data).unwrap_err();
        assert!(matches!(err, PdfError::Encrypted(_)), "{err:?}");
        assert_eq!(extractor.page_count(), 0);
    }
}
