//! Tests for pointer capture FSM.

#[cfg(test)]
mod tests {
    use crate::input::{CaptureNotice, CaptureState, PointerCapture};
    use crate::shared::ModalGate;
    use crate::test_support::RecordingHost;

    #[test]
    fn test_click_requests_capture_when_released() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost::default();

        assert!(capture.on_click(ModalGate::default(), &mut host));
        assert_eq!(host.capture_requests, 1);
        // Запрос ещё не подтверждён host'ом
        assert_eq!(capture.state(), CaptureState::Released);

        let notice = capture.on_capture_changed(true, ModalGate::default(), &mut host);
        assert_eq!(notice, Some(CaptureNotice::Locked));
        assert!(capture.is_captured());
    }

    #[test]
    fn test_click_ignored_while_modal_active() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost::default();

        assert!(!capture.on_click(ModalGate::active(), &mut host));
        assert_eq!(host.capture_requests, 0);
    }

    #[test]
    fn test_repeated_click_while_captured_is_ignored() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost::default();
        capture.on_capture_changed(true, ModalGate::default(), &mut host);

        assert!(!capture.on_click(ModalGate::default(), &mut host));
        assert_eq!(host.capture_requests, 0);
    }

    #[test]
    fn test_denied_request_is_swallowed_and_retried() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost {
            deny: true,
            ..Default::default()
        };

        assert!(!capture.on_click(ModalGate::default(), &mut host));
        assert_eq!(capture.state(), CaptureState::Released);

        // Следующий click: снова запрос
        host.deny = false;
        assert!(capture.on_click(ModalGate::default(), &mut host));
        assert_eq!(host.capture_requests, 2);
    }

    #[test]
    fn test_grant_during_modal_is_released_immediately() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost::default();

        let notice = capture.on_capture_changed(true, ModalGate::active(), &mut host);

        assert_eq!(notice, None);
        assert_eq!(host.releases, 1);
        assert_eq!(capture.state(), CaptureState::Released);
    }

    #[test]
    fn test_loss_notifies_unlocked_only_outside_modal() {
        let mut host = RecordingHost::default();

        let mut capture = PointerCapture::default();
        capture.on_capture_changed(true, ModalGate::default(), &mut host);
        assert_eq!(
            capture.on_capture_changed(false, ModalGate::default(), &mut host),
            Some(CaptureNotice::Unlocked)
        );

        // Повторная потеря: без дубля
        assert_eq!(capture.on_capture_changed(false, ModalGate::default(), &mut host), None);

        let mut capture = PointerCapture::default();
        capture.on_capture_changed(true, ModalGate::default(), &mut host);
        assert_eq!(capture.on_capture_changed(false, ModalGate::active(), &mut host), None);
        assert_eq!(capture.state(), CaptureState::Released);
    }

    #[test]
    fn test_force_release_only_when_captured() {
        let mut capture = PointerCapture::default();
        let mut host = RecordingHost::default();

        assert!(!capture.force_release(&mut host));
        assert_eq!(host.releases, 0);

        capture.on_capture_changed(true, ModalGate::default(), &mut host);
        assert!(capture.force_release(&mut host));
        assert_eq!(host.releases, 1);
        assert_eq!(capture.state(), CaptureState::Released);
    }
}
