use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_output_captures_bytes() {
    let output = OutputHandler::buffer();
    output.write_byte(b'h').unwrap();
    output.write_byte(b'i').unwrap();
    assert_eq!(output.captured(), b"hi".to_vec());
}

#[test]
fn buffer_output_keeps_non_utf8_bytes() {
    let output = OutputHandler::buffer();
    output.write_byte(0xFF).unwrap();
    assert_eq!(output.captured(), vec![0xFF]);
}

#[test]
fn silent_output_discards() {
    let output = OutputHandler::Silent;
    output.write_byte(b'x').unwrap();
    assert!(output.is_silent());
    assert!(output.captured().is_empty());
}

#[test]
fn stdout_output_captures_nothing() {
    let output = OutputHandler::Stdout;
    assert!(!output.is_silent());
    assert!(output.captured().is_empty());
    output.flush().unwrap();
}

#[test]
fn buffer_input_drains_in_order() {
    let input = InputSource::buffer(b"ab".to_vec());
    assert_eq!(input.read_byte().unwrap(), Some(b'a'));
    assert_eq!(input.read_byte().unwrap(), Some(b'b'));
    assert_eq!(input.read_byte().unwrap(), None);
    assert_eq!(input.read_byte().unwrap(), None);
}

/// Serves one chunk per `read` call; an empty chunk reports end of input.
struct Chunks(VecDeque<Vec<u8>>);

impl Read for Chunks {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.0.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

#[test]
fn reader_input_reads_bytes() {
    let input = InputSource::reader(Chunks(VecDeque::from([vec![b'a'], vec![b'b']])));
    assert_eq!(input.read_byte().unwrap(), Some(b'a'));
    assert_eq!(input.read_byte().unwrap(), Some(b'b'));
    assert_eq!(input.read_byte().unwrap(), None);
}

#[test]
fn reader_end_of_input_is_permanent() {
    // A terminal after Ctrl-D: end of input, then more bytes
    let input = InputSource::reader(Chunks(VecDeque::from([vec![], vec![b'x'], vec![b'y']])));
    assert_eq!(input.read_byte().unwrap(), None);
    assert_eq!(input.read_byte().unwrap(), None);
    assert_eq!(input.read_byte().unwrap(), None);
}

#[test]
fn empty_input_is_at_end() {
    assert_eq!(InputSource::Empty.read_byte().unwrap(), None);
}

#[test]
fn captured_factory_wires_both_ends() {
    let io = captured("z");
    assert_eq!(io.input.read_byte().unwrap(), Some(b'z'));
    io.output.write_byte(b'y').unwrap();
    assert_eq!(io.output.captured(), b"y".to_vec());
}

#[test]
fn buffer_output_is_thread_safe() {
    use std::thread;

    let io = captured("");
    let other = Arc::clone(&io);
    let writer = thread::spawn(move || {
        for _ in 0..100 {
            other.output.write_byte(b'a').unwrap();
        }
    });
    for _ in 0..100 {
        io.output.write_byte(b'b').unwrap();
    }
    writer.join().unwrap();
    assert_eq!(io.output.captured().len(), 200);
}
