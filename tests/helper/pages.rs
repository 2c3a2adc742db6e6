//! HTML fixtures shaped like the origin's pages

/// Search results linking to `/<slug>/<package_id>`
pub fn search_page(slug: &str, package_id: &str) -> String {
    format!(
        r#"<html><body>
            <div class="search-title">Results</div>
            <ul id="search-res">
                <li><a class="first-info" href="/{slug}/{package_id}" title="Example">
                    <p class="p1">Example App</p>
                </a></li>
            </ul>
        </body></html>"#
    )
}

/// A `/versions` page entry
pub struct VersionEntry<'a> {
    pub href: &'a str,
    pub version: &'a str,
    pub code: &'a str,
    pub size: &'a str,
    pub date: &'a str,
}

pub fn versions_page(title: &str, entries: &[VersionEntry<'_>]) -> String {
    let links: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<li><a class="ver_download_link" href="{}" data-dt-version="{}" data-dt-versioncode="{}">
                    <div class="ver-item-n">{}</div>
                    <div class="ver-item-s">{}</div>
                    <div class="update-on">{}</div>
                </a></li>"#,
                e.href, e.version, e.code, e.version, e.size, e.date
            )
        })
        .collect();

    format!(
        r#"<html><body>
            <div class="ver_title"><h1>{title}</h1></div>
            <ul class="ver-wrap">{links}</ul>
        </body></html>"#
    )
}

/// A variant entry on a version-detail page
pub struct VariantEntry<'a> {
    pub code: &'a str,
    pub href: &'a str,
    pub details: &'a [(&'a str, &'a str)],
}

pub fn detail_page(
    title: &str,
    version: &str,
    stats: &[&str],
    variants: &[VariantEntry<'_>],
) -> String {
    let stat_items: String = stats
        .iter()
        .map(|s| format!(r#"<li><div class="head">{s}</div><div class="desc">label</div></li>"#))
        .collect();

    let variant_items: String = variants
        .iter()
        .map(|v| {
            let pairs: String = v
                .details
                .iter()
                .map(|(label, value)| {
                    format!(
                        r#"<p><span class="label">{label}</span><span class="value">{value}</span></p>"#
                    )
                })
                .collect();
            format!(
                r#"<div class="apk">
                    <div class="info">
                        <span class="code">({})</span>
                        <span class="time">Oct 1, 2026</span>
                        <span class="size">25.1 MB</span>
                        <span class="sdk">Android 5.0+</span>
                    </div>
                    <a class="download-btn" href="{}">Download</a>
                    <div class="variants-desc-dialog"><div class="content">{}</div></div>
                </div>"#,
                v.code, v.href, pairs
            )
        })
        .collect();

    format!(
        r#"<html><body>
            <div class="info-title">{title}</div>
            <span class="version-name">{version}</span>
            <ul class="dev-partnership-head-info">{stat_items}</ul>
            <div id="version-list">{variant_items}</div>
        </body></html>"#
    )
}
