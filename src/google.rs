//! Google embeds built from panels, links and images.

use crate::component::Component;
use crate::widgets::{image, line_break, link, panel};

const ADSENSE_SHOW_ADS: &str = "http://pagead2.googlesyndication.com/pagead/show_ads.js";
const STATIC_MAP_URL: &str = "http://maps.google.com/maps/api/staticmap";

pub const DEFAULT_MAP_SIZE: &str = "200x200";
pub const DEFAULT_MAP_ZOOM: &str = "16";

/// AdSense slot
pub fn adsense(client: &str, slot: &str, width: u32, height: u32) -> Component {
    let code = format!(
        "<script type=\"text/javascript\"><!--\n\
         google_ad_client = \"{client}\";\n\
         google_ad_slot = \"{slot}\";\n\
         google_ad_width = {width};\n\
         google_ad_height = {height};\n\
         //-->\n\
         </script>\n\
         <script type=\"text/javascript\"\n\
         src=\"{ADSENSE_SHOW_ADS}\">\n\
         </script>"
    );
    panel().containing(&code)
}

/// Asynchronous Analytics tracker for account `id`
pub fn analytics(id: &str) -> Component {
    let code = format!(
        r#"
<script type="text/javascript">

  var _gaq = _gaq || [];
  _gaq.push(['_setAccount', '{id}']);
  _gaq.push(['_trackPageview']);

  (function() {{
    var ga = document.createElement('script'); ga.type = 'text/javascript'; ga.async = true;
    ga.src = ('https:' == document.location.protocol ? 'https://ssl' : 'http://www') + '.google-analytics.com/ga.js';
    var s = document.getElementsByTagName('script')[0]; s.parentNode.insertBefore(ga, s);
  }})();

</script>
"#
    );
    panel().with("clazz", "google-analytics").containing(&code)
}

/// Static map URL centered on `address`
pub fn static_map_url(address: &str, size: &str, zoom: &str) -> String {
    format!(
        "{STATIC_MAP_URL}?center={address}&zoom={zoom}&size={size}&sensor=true&markers=color:blue{address}"
    )
}

/// Address link followed by a linked static map image. The address is used
/// in the URL as given, without encoding.
pub fn maps(address: &str, size: &str, zoom: &str) -> Component {
    let href = static_map_url(address, size, zoom);
    panel()
        .with("clazz", "google-maps")
        .containing(&link(href.as_str(), address).with("target", "_blank"))
        .containing(&line_break())
        .containing(&link(href.as_str(), &image(href.as_str())).with("target", "_blank"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Markup;

    #[test]
    fn test_adsense() {
        let markup = adsense("pub-1", "42", 728, 90).as_markup();
        assert!(markup.starts_with("<div><script type=\"text/javascript\"><!--\n"));
        assert!(markup.contains("google_ad_client = \"pub-1\";"));
        assert!(markup.contains("google_ad_slot = \"42\";"));
        assert!(markup.contains("google_ad_width = 728;\ngoogle_ad_height = 90;"));
        assert!(markup.ends_with("show_ads.js\">\n</script></div>"));
    }

    #[test]
    fn test_analytics() {
        let markup = analytics("UA-1").as_markup();
        assert!(markup.starts_with(r#"<div class="google-analytics">"#));
        assert!(markup.contains("_gaq.push(['_setAccount', 'UA-1']);"));
        assert!(markup.contains("(function() {\n"));
    }

    #[test]
    fn test_maps() {
        let url = static_map_url("Rio", DEFAULT_MAP_SIZE, DEFAULT_MAP_ZOOM);
        assert_eq!(
            url,
            "http://maps.google.com/maps/api/staticmap?center=Rio&zoom=16&size=200x200&sensor=true&markers=color:blueRio"
        );
        assert_eq!(
            maps("Rio", "200x200", "16").as_markup(),
            format!(
                r#"<div class="google-maps"><a href="{url}" target="_blank">Rio</a><br/><a href="{url}" target="_blank"><img src="{url}"/></a></div>"#
            )
        );
    }
}
