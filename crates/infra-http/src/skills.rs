// Skills markup decoding: <skills><skill>Name</skill>...</skills>

use jobwatch_core::error::{AppError, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

const ROOT: &[u8] = b"skills";
const SKILL: &[u8] = b"skill";

/// Parse a skills payload into skill names, in document order
///
/// Children other than `skill` are ignored, as is anything after the root
/// element closes.
///
/// # Errors
/// - AppError::Decode if the payload is not well-formed or the root element
///   is not `skills`
pub fn parse_skills(payload: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(payload);
    let mut skills = Vec::new();
    let mut in_root = false;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) if !in_root => {
                expect_root(e.name().as_ref())?;
                in_root = true;
            }
            Event::Empty(e) if !in_root => {
                expect_root(e.name().as_ref())?;
                return Ok(skills);
            }
            Event::Start(e) if e.name().as_ref() == SKILL => {
                skills.push(read_skill(&mut reader)?);
            }
            Event::Start(e) => {
                reader.read_to_end(e.name()).map_err(xml_error)?;
            }
            Event::Empty(e) if e.name().as_ref() == SKILL => skills.push(String::new()),
            // Mismatched end tags are rejected by the reader, so this closes the root
            Event::End(_) => return Ok(skills),
            Event::Text(t) if !in_root => {
                if !t.unescape().map_err(xml_error)?.trim().is_empty() {
                    return Err(AppError::Decode(
                        "skills markup has text outside the root element".to_string(),
                    ));
                }
            }
            Event::CData(_) if !in_root => {
                return Err(AppError::Decode(
                    "skills markup has character data outside the root element".to_string(),
                ));
            }
            Event::Eof => {
                let msg = if in_root {
                    "skills markup ended before </skills>"
                } else {
                    "skills markup is empty"
                };
                return Err(AppError::Decode(msg.to_string()));
            }
            _ => {}
        }
    }
}

// Character data of one <skill>, up to its end tag
fn read_skill(reader: &mut Reader<&[u8]>) -> Result<String> {
    let mut name = String::new();
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Text(t) => name.push_str(&t.unescape().map_err(xml_error)?),
            Event::CData(c) => name.push_str(&String::from_utf8_lossy(&c)),
            Event::Start(e) => {
                reader.read_to_end(e.name()).map_err(xml_error)?;
            }
            Event::End(_) => return Ok(name),
            Event::Eof => {
                return Err(AppError::Decode(
                    "skills markup ended inside <skill>".to_string(),
                ))
            }
            _ => {}
        }
    }
}

fn expect_root(name: &[u8]) -> Result<()> {
    if name == ROOT {
        Ok(())
    } else {
        Err(AppError::Decode(format!(
            "expected element <skills> but found <{}>",
            String::from_utf8_lossy(name)
        )))
    }
}

fn xml_error(err: quick_xml::Error) -> AppError {
    AppError::Decode(format!("could not decode skills markup: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_in_order() {
        let skills =
            parse_skills("<skills><skill>AWS</skill><skill>Azure</skill><skill>Docker</skill></skills>")
                .unwrap();
        assert_eq!(skills, vec!["AWS", "Azure", "Docker"]);
    }

    #[test]
    fn test_parse_skills_with_declaration_and_indentation() {
        let payload = r#"<?xml version="1.0"?>
            <skills>
                <skill>Deep Learning</skill>
                <skill>R&amp;D</skill>
            </skills>"#;
        assert_eq!(parse_skills(payload).unwrap(), vec!["Deep Learning", "R&D"]);
    }

    #[test]
    fn test_parse_empty_root() {
        assert!(parse_skills("<skills/>").unwrap().is_empty());
        assert!(parse_skills("<skills></skills>").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_children_are_ignored() {
        let payload = "<skills><level>senior</level><skill>Go</skill></skills>";
        assert_eq!(parse_skills(payload).unwrap(), vec!["Go"]);
    }

    #[test]
    fn test_wrong_root_is_decode_error() {
        let err = parse_skills("<tools><skill>Go</skill></tools>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
        assert!(err.to_string().contains("<tools>"));
    }

    #[test]
    fn test_malformed_payloads_are_decode_errors() {
        for payload in [
            "<skills><skill>AWS</skills>",
            "<skills><skill>AWS</skill>",
            "not markup at all",
            "",
        ] {
            let result = parse_skills(payload);
            assert!(
                matches!(result, Err(AppError::Decode(_))),
                "{:?} should fail, got {:?}",
                payload,
                result
            );
        }
    }
}
