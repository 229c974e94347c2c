//! Conversions from snippet service responses.

use super::{DiffLine, DiffResult, DiffSide, LineType};
use snippet_client::{CompareResponse, DiffLineResponse, DiffSideResponse, LineTypeResponse};

impl From<LineTypeResponse> for LineType {
    fn from(value: LineTypeResponse) -> Self {
        match value {
            LineTypeResponse::Unchanged => LineType::Unchanged,
            LineTypeResponse::Added => LineType::Added,
            LineTypeResponse::Removed => LineType::Removed,
        }
    }
}

impl From<DiffLineResponse> for DiffLine {
    fn from(value: DiffLineResponse) -> Self {
        DiffLine::new(value.line_num, value.line_type.into(), value.line_content)
    }
}

impl From<DiffSideResponse> for DiffSide {
    fn from(value: DiffSideResponse) -> Self {
        DiffSide::new(
            value.snippet_name,
            value.lines.into_iter().map(DiffLine::from).collect(),
        )
    }
}

impl From<CompareResponse> for DiffResult {
    fn from(value: CompareResponse) -> Self {
        DiffResult::new(value.comparing.into(), value.comparing_to.into())
    }
}
