// tests/common/mod.rs
//
// Fixtures shaped like what the backend actually sends.
#![allow(dead_code)]

pub const FEATURES: [&str; 30] = [
    "having_IP_Address", "URL_Length", "Shortining_Service", "having_At_Symbol",
    "double_slash_redirecting", "Prefix_Suffix", "having_Sub_Domain", "SSLfinal_State",
    "Domain_registeration_length", "Favicon", "port", "HTTPS_token", "Request_URL",
    "URL_of_Anchor", "Links_in_tags", "SFH", "Submitting_to_email", "Abnormal_URL",
    "Redirect", "on_mouseover", "RightClick", "popUpWidnow", "Iframe", "age_of_domain",
    "DNSRecord", "web_traffic", "Page_Rank", "Google_Index", "Links_pointing_to_page",
    "Statistical_report",
];

/// pandas `DataFrame.to_html` output: blank index header, `<th>` row index,
/// 30 feature columns plus `predicted_column`.
pub fn pandas_table(predictions: &[&str]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><title>Results</title></head><body>\n\
         <table border=\"1\" class=\"dataframe table table-striped\">\n<thead>\n\
         <tr style=\"text-align: right;\">\n<th></th>\n",
    );
    for f in FEATURES {
        html.push_str(&format!("<th>{f}</th>\n"));
    }
    html.push_str("<th>predicted_column</th>\n</tr>\n</thead>\n<tbody>\n");
    for (i, p) in predictions.iter().enumerate() {
        html.push_str(&format!("<tr>\n<th>{i}</th>\n"));
        for (j, _) in FEATURES.iter().enumerate() {
            let v = if (i + j) % 2 == 0 { "1" } else { "-1" };
            html.push_str(&format!("<td>{v}</td>\n"));
        }
        html.push_str(&format!("<td>{p}</td>\n</tr>\n"));
    }
    html.push_str("</tbody>\n</table>\n</body></html>\n");
    html
}

/// `/predict-url` JSON with all 30 features.
pub fn url_json(url: &str, prediction_value: i64) -> String {
    let label = if prediction_value == 1 { "Legitimate" } else { "Phishing" };
    let features: Vec<String> = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| format!("\"{f}\": {}", if i % 3 == 0 { -1 } else { 1 }))
        .collect();
    format!(
        "{{\"url\": \"{url}\", \"prediction\": \"{label}\", \"prediction_value\": {prediction_value}, \
         \"confidence\": \"High\", \"features\": {{{}}}}}",
        features.join(", ")
    )
}
