use super::*;

const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36";
const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                          (KHTML, like Gecko) Version/17.4 Safari/605.1.15";
const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 \
                      (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
                       (KHTML, like Gecko) Chrome/129.0.0.0 Mobile Safari/537.36";

#[test]
fn phones_are_mobile() {
    assert_eq!(classify_user_agent(IPHONE, 5), DeviceKind::Mobile);
    assert_eq!(classify_user_agent(ANDROID, 5), DeviceKind::Mobile);
}

#[test]
fn desktop_browsers_are_desktop() {
    assert_eq!(classify_user_agent(DESKTOP_CHROME, 0), DeviceKind::Desktop);
    assert_eq!(classify_user_agent(MAC_SAFARI, 0), DeviceKind::Desktop);
}

#[test]
fn touch_capable_macintosh_is_an_ipad() {
    assert_eq!(classify_user_agent(MAC_SAFARI, 5), DeviceKind::Mobile);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_device_is_desktop_in_non_hydrate_tests() {
    assert_eq!(detect_device(), DeviceKind::Desktop);
}
