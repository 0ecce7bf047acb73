use crate::models::{AlertRecord, AssetRecord, Category, FetchOutcome, RemoteRecord};

/// Maximum number of records rendered in one reply.
pub const PREVIEW_LIMIT: usize = 10;

/// Render a fetch outcome as the chat reply text.
///
/// Failures come back as their detail text unchanged. Successful results are
/// summarized as a numbered list of at most [`PREVIEW_LIMIT`] entries with a
/// trailing count of the records left out.
pub fn format_outcome(outcome: &FetchOutcome, category: Category) -> String {
    let items = match outcome {
        FetchOutcome::Failure(failure) => return failure.detail.clone(),
        FetchOutcome::Success { items } => items,
    };

    let label = category.label();
    if items.is_empty() {
        return format!("No {} found in your Orca Security account.", label);
    }

    let mut out = format!("Found {} {}:\n\n", items.len(), label);
    for (index, record) in items.iter().take(PREVIEW_LIMIT).enumerate() {
        match record {
            RemoteRecord::Asset(asset) => push_asset(&mut out, index + 1, asset),
            RemoteRecord::Alert(alert) => push_alert(&mut out, index + 1, alert),
        }
        out.push('\n');
    }

    if items.len() > PREVIEW_LIMIT {
        out.push_str(&format!("\n... and {} more {}.", items.len() - PREVIEW_LIMIT, label));
    }

    out
}

fn push_asset(out: &mut String, number: usize, asset: &AssetRecord) {
    let title = present(&asset.name).or(present(&asset.id)).unwrap_or("");
    out.push_str(&format!("{}. {}\n", number, title));
    out.push_str(&format!("   Type: {}\n", text(&asset.asset_type)));
    if let Some(provider) = present(&asset.cloud_provider) {
        out.push_str(&format!("   Provider: {}\n", provider));
    }
    if let Some(state) = present(&asset.state) {
        out.push_str(&format!("   State: {}\n", state));
    }
}

fn push_alert(out: &mut String, number: usize, alert: &AlertRecord) {
    let title = present(&alert.type_label).unwrap_or("Alert");
    out.push_str(&format!("{}. {}\n", number, title));
    out.push_str(&format!("   Severity: {}\n", text(&alert.severity)));
    out.push_str(&format!("   State: {}\n", text(&alert.state)));
    if let Some(asset) = present(&alert.asset_name) {
        out.push_str(&format!("   Asset: {}\n", asset));
    }
    if let Some(description) = present(&alert.description) {
        out.push_str(&format!("   Description: {}\n", description));
    }
}

// Empty strings count as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureReason, FetchOutcome};

    fn alert(n: usize) -> RemoteRecord {
        RemoteRecord::Alert(AlertRecord {
            id: Some(format!("alert-{}", n)),
            type_label: Some(format!("Finding {}", n)),
            severity: Some("high".into()),
            state: Some("open".into()),
            asset_name: None,
            description: None,
        })
    }

    fn success(items: Vec<RemoteRecord>) -> FetchOutcome {
        FetchOutcome::Success { items }
    }

    #[test]
    fn test_failure_detail_verbatim() {
        let outcome = FetchOutcome::failure(FailureReason::RemoteStatusError, "Orca API error: 500 Internal Server Error");
        assert_eq!(format_outcome(&outcome, Category::Assets), "Orca API error: 500 Internal Server Error");
    }

    #[test]
    fn test_empty_result_sentence_per_category() {
        let cases = [
            (Category::Alerts, "No alerts found in your Orca Security account."),
            (Category::Assets, "No assets found in your Orca Security account."),
            (Category::Vulnerabilities, "No vulnerabilities found in your Orca Security account."),
            (Category::ComplianceIssues, "No compliance issues found in your Orca Security account."),
            (Category::Misconfigurations, "No misconfigurations found in your Orca Security account."),
        ];
        for (category, expected) in cases {
            assert_eq!(format_outcome(&success(vec![]), category), expected);
        }
    }

    #[test]
    fn test_alert_entry_layout() {
        let record = RemoteRecord::Alert(AlertRecord {
            id: Some("a1".into()),
            type_label: Some("Public S3 bucket".into()),
            severity: Some("critical".into()),
            state: Some("open".into()),
            asset_name: Some("logs-bucket".into()),
            description: Some("Bucket allows public read".into()),
        });
        let out = format_outcome(&success(vec![record]), Category::Alerts);
        assert_eq!(
            out,
            "Found 1 alerts:\n\n\
             1. Public S3 bucket\n   Severity: critical\n   State: open\n   Asset: logs-bucket\n   Description: Bucket allows public read\n\n"
        );
    }

    #[test]
    fn test_alert_title_fallback() {
        let record = RemoteRecord::Alert(AlertRecord {
            severity: Some("low".into()),
            state: Some("closed".into()),
            ..Default::default()
        });
        let out = format_outcome(&success(vec![record]), Category::Misconfigurations);
        assert!(out.starts_with("Found 1 misconfigurations:\n\n1. Alert\n"));
        assert!(!out.contains("Asset:"));
        assert!(!out.contains("Description:"));
    }

    #[test]
    fn test_asset_entry_layout() {
        let full = RemoteRecord::Asset(AssetRecord {
            id: Some("i-123".into()),
            name: Some("web-01".into()),
            asset_type: Some("AwsEc2Instance".into()),
            cloud_provider: Some("aws".into()),
            state: Some("running".into()),
        });
        let bare = RemoteRecord::Asset(AssetRecord {
            id: Some("bucket-9".into()),
            asset_type: Some("AwsS3Bucket".into()),
            ..Default::default()
        });
        let out = format_outcome(&success(vec![full, bare]), Category::Assets);
        assert_eq!(
            out,
            "Found 2 assets:\n\n\
             1. web-01\n   Type: AwsEc2Instance\n   Provider: aws\n   State: running\n\n\
             2. bucket-9\n   Type: AwsS3Bucket\n\n"
        );
    }

    #[test]
    fn test_exactly_ten_has_no_tail() {
        let out = format_outcome(&success((1..=10).map(alert).collect()), Category::Alerts);
        assert!(out.contains("10. Finding 10\n"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn test_eleven_renders_ten_plus_tail() {
        let out = format_outcome(&success((1..=11).map(alert).collect()), Category::Vulnerabilities);
        assert!(out.starts_with("Found 11 vulnerabilities:\n\n"));
        assert!(out.contains("10. Finding 10\n"));
        assert!(!out.contains("11. "));
        assert_eq!(out.matches("   Severity: ").count(), 10);
        assert!(out.ends_with("\n\n\n... and 1 more vulnerabilities."));
    }

    #[test]
    fn test_cap_applies_to_assets() {
        let assets = (0..25)
            .map(|i| RemoteRecord::Asset(AssetRecord { id: Some(format!("as-{}", i)), ..Default::default() }))
            .collect();
        let out = format_outcome(&success(assets), Category::Assets);
        assert_eq!(out.matches("   Type: ").count(), 10);
        assert!(out.ends_with("... and 15 more assets."));
    }
}
