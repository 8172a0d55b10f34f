/*!
# Control Flow

`lbl name` marks a line. `jmp name` continues after that line. The
conditional forms `jeq` `jne` `jlt` `jgt` `jge` `jle` jump only when the
last `cmp` agrees.

```text
mov i 0
mov one 1
mov three 3
lbl loop
add i one
prt i
cmp i three
jlt loop
```

<pre><code>&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

Pine never reads ahead. A label is known once its line has been read, so
a jump backward goes straight there. A jump forward to a label not yet
seen scans ahead for it. While scanning, nothing runs except `lbl`, but
every line is still checked and a malformed one stops the program.

```text
jmp skip
prt never
lbl skip
```

Reaching the end of the file while scanning simply ends the program.

Declaring the same label on two different lines is a
`LABEL REDECLARED` error. Passing over the same `lbl` line again, as
loops do, is fine.

## Subroutines

`run name` jumps to a label and remembers where it came from. `ret`
goes back to the line after the `run`. A `ret` with nowhere to go is an
`EMPTY CALL STACK` error.

```text
jmp main
lbl greet
prt msg
ret
lbl main
mov msg 'hi'
run greet
run greet
```

<pre><code>&nbsp;  hi
&nbsp;  hi
</code></pre>

*/
