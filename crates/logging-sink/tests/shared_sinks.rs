//! Integration tests for sinks shared between several writers.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::thread;

use logging_sink::{Level, LogSink, WriterSink};

/// Writer that appends into a shared buffer so the test can inspect it while
/// the sink is still alive.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn lines_from_many_threads_never_interleave() {
    let buffer = SharedBuffer::default();
    let sink: Arc<dyn LogSink> = Arc::new(WriterSink::new(buffer.clone()).with_source("host"));

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for n in 0..50 {
                    sink.write(Level::Info, &format!("[Net|worker{worker}]: packet {n}"));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let output = buffer.contents();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines.iter().all(|line| {
        line.starts_with("[Info   :host] [Net|worker") && line.contains("]: packet ")
    }));
}

#[test]
fn trait_objects_keep_levels() {
    let buffer = SharedBuffer::default();
    let sink: Box<dyn LogSink> = Box::new(WriterSink::new(buffer.clone()));

    sink.info("fine");
    sink.warning("x is null");
    sink.error("Can't debug null object");

    assert_eq!(
        buffer.contents(),
        "[Info   :switchlog] fine\n[Warning:switchlog] x is null\n[Error  :switchlog] Can't debug null object\n"
    );
}
