use super::*;

#[test]
fn blog_endpoint_formats_id() {
    assert_eq!(blog_endpoint("5"), "/api/blogs/5");
}

#[test]
fn blog_request_failed_message_includes_status() {
    assert_eq!(blog_request_failed_message(404), "blog request failed: 404");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_blog_is_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_blog("5"));
    assert_eq!(result, Err("not available on server".to_owned()));
}
