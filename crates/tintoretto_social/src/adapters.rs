//! Built-in destination adapters.
//!
//! Each destination maps the generic request fields onto its own wire
//! names. JSON destinations take the media as hosted URLs; multipart
//! destinations declare `RemoteMedia` fields the transport re-fetches and
//! attaches as binary parts at dispatch time.

use crate::registry::AdapterSpec;
use serde_json::json;
use tintoretto_core::{
    Destination, MediaKind, MultipartField, PublishRequest, WireEncoding, WirePayload,
};

/// All adapters shipped with the library.
pub(crate) fn builtin_adapters() -> Vec<AdapterSpec> {
    vec![
        AdapterSpec::new(
            Destination::Facebook,
            WireEncoding::Json,
            "publish/facebook",
            facebook_payload,
            accept_all,
        ),
        AdapterSpec::new(
            Destination::Instagram,
            WireEncoding::Json,
            "publish/instagram",
            instagram_payload,
            require_media,
        ),
        AdapterSpec::new(
            Destination::XTwitter,
            WireEncoding::Json,
            "publish/x",
            x_payload,
            accept_all,
        ),
        AdapterSpec::new(
            Destination::LinkedIn,
            WireEncoding::Json,
            "publish/linkedin",
            linkedin_payload,
            accept_all,
        ),
        AdapterSpec::new(
            Destination::Mastodon,
            WireEncoding::Multipart,
            "publish/mastodon",
            mastodon_payload,
            accept_all,
        ),
        AdapterSpec::new(
            Destination::YouTube,
            WireEncoding::Multipart,
            "publish/youtube",
            youtube_payload,
            require_media,
        ),
    ]
}

fn accept_all(_request: &PublishRequest) -> Result<(), String> {
    Ok(())
}

fn require_media(request: &PublishRequest) -> Result<(), String> {
    if request.media().is_empty() {
        return Err("at least one media attachment is required".to_string());
    }
    Ok(())
}

fn facebook_payload(request: &PublishRequest) -> WirePayload {
    WirePayload::Json(json!({
        "message": request.content(),
        "media_urls": request.media(),
    }))
}

fn instagram_payload(request: &PublishRequest) -> WirePayload {
    WirePayload::Json(json!({
        "caption": request.content(),
        "media_urls": request.media(),
    }))
}

fn x_payload(request: &PublishRequest) -> WirePayload {
    WirePayload::Json(json!({
        "text": request.content(),
        "media_urls": request.media(),
    }))
}

fn linkedin_payload(request: &PublishRequest) -> WirePayload {
    WirePayload::Json(json!({
        "commentary": request.content(),
        "media_urls": request.media(),
    }))
}

fn mastodon_payload(request: &PublishRequest) -> WirePayload {
    let mut fields = vec![MultipartField::Text {
        name: "status".to_string(),
        value: request.content().clone(),
    }];
    for url in request.media() {
        fields.push(MultipartField::RemoteMedia {
            name: "media[]".to_string(),
            url: url.clone(),
            kind: MediaKind::Other,
        });
    }
    WirePayload::Multipart(fields)
}

fn youtube_payload(request: &PublishRequest) -> WirePayload {
    let (title, description) = match request.video_meta() {
        Some(meta) => (meta.title().clone(), meta.description().clone()),
        // Fall back to the first line of the content for untitled uploads.
        None => (
            request.content().lines().next().unwrap_or_default().to_string(),
            request.content().clone(),
        ),
    };
    let mut fields = vec![
        MultipartField::Text {
            name: "title".to_string(),
            value: title,
        },
        MultipartField::Text {
            name: "description".to_string(),
            value: description,
        },
    ];
    if let Some(url) = request.media().first() {
        fields.push(MultipartField::RemoteMedia {
            name: "video".to_string(),
            url: url.clone(),
            kind: MediaKind::Video,
        });
    }
    WirePayload::Multipart(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintoretto_core::VideoMeta;

    fn request(media: Vec<&str>) -> PublishRequest {
        PublishRequest::builder()
            .content("hello world")
            .media(media.into_iter().map(str::to_string).collect::<Vec<_>>())
            .destinations(vec![Destination::Facebook])
            .build()
            .unwrap()
    }

    #[test]
    fn json_field_mapping_per_destination() {
        let request = request(vec!["https://cdn.example.com/a.png"]);

        let WirePayload::Json(facebook) = facebook_payload(&request) else {
            panic!("expected json");
        };
        assert_eq!(facebook["message"], "hello world");
        assert_eq!(facebook["media_urls"][0], "https://cdn.example.com/a.png");

        let WirePayload::Json(instagram) = instagram_payload(&request) else {
            panic!("expected json");
        };
        assert_eq!(instagram["caption"], "hello world");

        let WirePayload::Json(x) = x_payload(&request) else {
            panic!("expected json");
        };
        assert_eq!(x["text"], "hello world");

        let WirePayload::Json(linkedin) = linkedin_payload(&request) else {
            panic!("expected json");
        };
        assert_eq!(linkedin["commentary"], "hello world");
    }

    #[test]
    fn mastodon_attaches_every_media_url() {
        let request = request(vec![
            "https://cdn.example.com/a.png",
            "https://cdn.example.com/b.png",
        ]);
        let WirePayload::Multipart(fields) = mastodon_payload(&request) else {
            panic!("expected multipart");
        };
        assert_eq!(fields.len(), 3);
        assert!(matches!(
            &fields[0],
            MultipartField::Text { name, value } if name == "status" && value == "hello world"
        ));
        let media_parts = fields
            .iter()
            .filter(|f| matches!(f, MultipartField::RemoteMedia { name, .. } if name == "media[]"))
            .count();
        assert_eq!(media_parts, 2);
    }

    #[test]
    fn youtube_prefers_explicit_video_meta() {
        let base = request(vec!["https://cdn.example.com/clip.mp4"]);
        let with_meta = PublishRequest::builder()
            .content("ignored body")
            .media(base.media().clone())
            .destinations(vec![Destination::YouTube])
            .video_meta(Some(VideoMeta::new("My Clip", "A description")))
            .build()
            .unwrap();

        let WirePayload::Multipart(fields) = youtube_payload(&with_meta) else {
            panic!("expected multipart");
        };
        assert!(matches!(
            &fields[0],
            MultipartField::Text { name, value } if name == "title" && value == "My Clip"
        ));
        assert!(matches!(
            &fields[2],
            MultipartField::RemoteMedia { name, kind, .. }
                if name == "video" && *kind == MediaKind::Video
        ));
    }

    #[test]
    fn youtube_falls_back_to_content_title() {
        let request = request(vec!["https://cdn.example.com/clip.mp4"]);
        let WirePayload::Multipart(fields) = youtube_payload(&request) else {
            panic!("expected multipart");
        };
        assert!(matches!(
            &fields[0],
            MultipartField::Text { name, value } if name == "title" && value == "hello world"
        ));
    }

    #[test]
    fn media_validators() {
        assert!(require_media(&request(vec![])).is_err());
        assert!(require_media(&request(vec!["https://cdn.example.com/a.png"])).is_ok());
        assert!(accept_all(&request(vec![])).is_ok());
    }
}
