use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a destination shared between a logger and its caller.
///
/// A logger takes ownership of the sink it is given. Wrapping the destination
/// in a `SharedSink` lets the caller keep a clone, so it can continue to write
/// to the same destination or inspect what was logged. Each `write_all` holds
/// the lock for the whole buffer, so a record handed over in one call is never
/// interleaved with writes from other clones.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use logger_sink::SharedSink;
///
/// let sink = SharedSink::new(Vec::new());
/// let mut handle = sink.clone();
///
/// handle.write_all(b"from the logger\n")?;
/// sink.lock().extend_from_slice(b"from the caller\n");
///
/// assert_eq!(sink.contents_lossy(), "from the logger\nfrom the caller\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct SharedSink<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> Clone for SharedSink<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W> SharedSink<W> {
    /// Wraps `writer` in a shareable handle.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Locks the destination.
    ///
    /// A lock poisoned by a panicking writer is recovered; the destination
    /// holds plain bytes and stays usable.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the destination.
    pub fn with<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.lock())
    }

    /// Reports whether `other` refers to the same destination.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the destination if this is the last handle, or the handle back otherwise.
    pub fn try_unwrap(self) -> Result<W, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }
}

impl SharedSink<Vec<u8>> {
    /// Copies the bytes written so far.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Copies the bytes written so far as text, replacing invalid UTF-8.
    #[must_use]
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Removes and returns the bytes written so far.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }
}

impl<W> Write for SharedSink<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_destination() {
        let sink = SharedSink::new(Vec::new());
        let mut a = sink.clone();
        let mut b = sink.clone();
        a.write_all(b"a").expect("write succeeds");
        b.write_all(b"b").expect("write succeeds");
        assert_eq!(sink.contents(), b"ab".to_vec());
        assert!(a.same_as(&b));
        assert!(!a.same_as(&SharedSink::new(Vec::new())));
    }

    #[test]
    fn take_drains_buffer() {
        let sink = SharedSink::new(Vec::new());
        sink.with(|buf| buf.extend_from_slice(b"first"));
        assert_eq!(sink.take(), b"first".to_vec());
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn try_unwrap_requires_last_handle() {
        let sink = SharedSink::new(vec![1_u8]);
        let other = sink.clone();
        let sink = sink.try_unwrap().expect_err("other handle alive");
        drop(other);
        assert_eq!(sink.try_unwrap().expect("last handle"), vec![1_u8]);
    }

    #[test]
    fn concurrent_write_all_does_not_interleave() {
        let sink = SharedSink::new(Vec::new());
        let handles: Vec<_> = (0..4_u8)
            .map(|id| {
                let mut sink = sink.clone();
                thread::spawn(move || {
                    let mut line = [b'a' + id; 33];
                    line[32] = b'\n';
                    for _ in 0..50 {
                        sink.write_all(&line).expect("write succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }

        let contents = sink.contents_lossy();
        assert_eq!(contents.lines().count(), 4 * 50);
        for line in contents.lines() {
            assert_eq!(line.len(), 32);
            assert!(line.bytes().all(|byte| byte == line.as_bytes()[0]));
        }
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let sink = SharedSink::new(Vec::new());
        let clone = sink.clone();
        let _ = thread::spawn(move || {
            let _guard = clone.lock();
            panic!("poison the lock");
        })
        .join();
        sink.with(|buf| buf.push(b'x'));
        assert_eq!(sink.contents(), b"x".to_vec());
    }
}
