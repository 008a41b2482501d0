#[derive(Debug)]
pub enum KitchenError {
    EmptyQueueWhenNotExpected,
    FileReaderError,
}
