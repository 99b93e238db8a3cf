use super::*;

#[test]
fn course_path_formats_expected_path() {
    assert_eq!(course_path(7), "/courses/7");
}

#[test]
fn endpoint_at_joins_base_and_path() {
    assert_eq!(endpoint_at("http://localhost:3000", "/login"), "http://localhost:3000/login");
    assert_eq!(
        endpoint_at("http://localhost:3000", &course_path(12)),
        "http://localhost:3000/courses/12"
    );
}

#[cfg(not(feature = "hydrate"))]
mod without_browser {
    use super::*;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }

    #[test]
    fn fetch_courses_is_unavailable() {
        assert_eq!(block_on(fetch_courses()), Err(ApiError::Unavailable));
    }

    #[test]
    fn delete_course_is_unavailable() {
        assert_eq!(block_on(delete_course(7)), Err(ApiError::Unavailable));
    }
}
